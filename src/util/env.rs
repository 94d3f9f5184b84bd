pub fn parse_var<T: std::str::FromStr>(var: &'static str) -> Option<T> {
    dotenvy::var(var).ok().and_then(|i| i.parse().ok())
}

pub fn parse_strings_from_var(var: &'static str) -> Option<Vec<String>> {
    dotenvy::var(var)
        .ok()
        .and_then(|x| serde_json::from_str::<Vec<String>>(&x).ok())
}
