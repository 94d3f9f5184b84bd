use serde_json::{json, Value};

pub const USER_ALPHA: &str = "user_2mFqa1";
pub const USER_BETA: &str = "user_9xLbe7";

pub fn complete_idea_submission() -> Value {
    json!({
        "formData": {
            "ideaTitle": "GetYourStack",
            "devName": "Jane Doe",
            "ideaUrl": "https://getyourstack.com",
            "ideaDescription": "Recommends a stack for your next project",
            "ideaTag": "devtools",
            "ideaComp": "StackShare",
            "isOpenSource": true,
            "targetAudience": "developers",
            "problemSolved": "Choosing a stack is hard",
            "launchDate": "2025-06-01",
            "techStack": "Rust, SQLite",
            "teamSize": 3,
            "repoLink": "https://github.com/example/getyourstack",
            "budget": "$5000",
            "selectedTechnologies": ["Rust", "Next.js"],
        },
        "userId": USER_ALPHA,
    })
}

/// Only the required fields filled in; the untouched inputs arrive as
/// empty strings and a zero, the way the browser form sends them.
pub fn minimal_idea_submission() -> Value {
    json!({
        "formData": {
            "ideaTitle": "Tiny Idea",
            "devName": "Sam",
            "ideaUrl": "https://example.com",
            "ideaDescription": "",
            "ideaTag": "",
            "ideaComp": "",
            "isOpenSource": false,
            "targetAudience": "",
            "problemSolved": "",
            "launchDate": "",
            "techStack": "",
            "teamSize": 0,
            "repoLink": "",
            "budget": "",
            "selectedTechnologies": [],
        }
    })
}

pub fn analysis_submission_object(user_id: &str, title: &str, tech: &str) -> Value {
    json!({
        "userId": user_id,
        "devName": "Jane Doe",
        "response": {
            "title": title,
            "desc": "An analyzed idea",
            "tech_stack": [{ "name": tech }],
            "pros": ["viable"],
        }
    })
}

pub fn analysis_submission_string(user_id: &str, title: &str, tech: &str) -> Value {
    let raw = serde_json::to_string(&json!({
        "title": title,
        "desc": "An analyzed idea, serialized",
        "tech_stack": [{ "name": tech }],
        "pros": [],
    }))
    .unwrap();

    json!({
        "userId": user_id,
        "response": raw,
    })
}
