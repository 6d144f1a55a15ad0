use serde_json::{json, Value};

pub fn education_json(years: &str) -> Value {
    json!({
        "degree": "BSc Computer Science",
        "school": "FAST NUCES",
        "years": years,
        "location": "Lahore",
        "about": "Distributed systems and compilers",
        "highlights": ["Dean's list"]
    })
}

pub fn experience_json(company: &str, start_date: &str) -> Value {
    json!({
        "company": company,
        "position": "Backend Engineer",
        "location": "Remote",
        "description": "Built APIs",
        "responsibilities": ["On-call", "Code review"],
        "startDate": start_date,
        "current": true
    })
}

pub fn skill_json(name: &str, category: &str) -> Value {
    json!({
        "name": name,
        "proficiency": "Advanced",
        "category": category
    })
}

pub fn project_json(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Personal portfolio site",
        "technologies": ["React", "Node", "React"],
        "imageUrl": "",
        "githubUrl": "https://github.com/me/portfolio",
        "liveUrl": "https://portfolio.dev"
    })
}
