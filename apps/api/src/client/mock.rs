//! Offline stand-ins used when the provider cannot be reached in direct mode.
//!
//! Both generators are pure: the same major and skills (or career path) always
//! produce the same document.

use crate::models::advice::{CareerAdvice, CareerPathEntry, CurrentAdvice};
use crate::models::market::{MarketAnalysis, SalaryRange};

struct Track {
    keywords: &'static [&'static str],
    careers: [(&'static str, &'static [&'static str]); 4],
    outlook: &'static str,
    salary: [&'static str; 4],
    companies: &'static [&'static str],
}

const TECHNOLOGY: Track = Track {
    keywords: &["information technology", "computer", "software", "data", "engineering", "developer", "engineer"],
    careers: [
        ("Software Engineer", &["Programming", "Data structures", "Git", "Testing", "System design"]),
        ("Data Analyst", &["SQL", "Python", "Statistics", "Visualization", "Communication"]),
        ("Cloud Engineer", &["Linux", "Networking", "Containers", "Infrastructure as code", "Monitoring"]),
        ("QA Automation Engineer", &["Test design", "Scripting", "CI pipelines", "Attention to detail", "Debugging"]),
    ],
    outlook: "Demand for technology roles keeps growing as companies digitize their operations.",
    salary: ["8-15 million VND", "15-30 million VND", "30-50 million VND", "50-80 million VND"],
    companies: &["FPT Software", "VNG", "Viettel", "MoMo"],
};

const BUSINESS: Track = Track {
    keywords: &["business", "marketing", "finance", "economics", "management", "accounting", "analyst"],
    careers: [
        ("Business Analyst", &["Requirements gathering", "Excel", "SQL", "Stakeholder management", "Process modeling"]),
        ("Digital Marketing Specialist", &["SEO", "Content strategy", "Analytics", "Copywriting", "Social media"]),
        ("Financial Analyst", &["Financial modeling", "Excel", "Accounting", "Forecasting", "Reporting"]),
        ("Project Coordinator", &["Planning", "Communication", "Risk tracking", "Agile basics", "Documentation"]),
    ],
    outlook: "Analytical business roles are in steady demand across startups and enterprises alike.",
    salary: ["7-12 million VND", "12-25 million VND", "25-40 million VND", "40-60 million VND"],
    companies: &["Unilever Vietnam", "Vinamilk", "Masan Group", "Techcombank"],
};

const DESIGN: Track = Track {
    keywords: &["design", "art", "media", "architecture", "communication"],
    careers: [
        ("UX/UI Designer", &["User research", "Wireframing", "Figma", "Prototyping", "Visual design"]),
        ("Graphic Designer", &["Typography", "Layout", "Adobe suite", "Branding", "Color theory"]),
        ("Product Designer", &["Design systems", "Interaction design", "Usability testing", "Collaboration", "Storytelling"]),
        ("Content Creator", &["Video editing", "Writing", "Audience analysis", "Scheduling", "Photography"]),
    ],
    outlook: "Companies increasingly compete on experience, which keeps design talent in demand.",
    salary: ["7-12 million VND", "12-22 million VND", "22-35 million VND", "35-55 million VND"],
    companies: &["VNG", "Tiki", "Shopee Vietnam", "Ogilvy Vietnam"],
};

const GENERAL: Track = Track {
    keywords: &[],
    careers: [
        ("Project Coordinator", &["Planning", "Communication", "Organization", "Teamwork", "Reporting"]),
        ("Customer Success Specialist", &["Empathy", "Problem solving", "Product knowledge", "Writing", "CRM tools"]),
        ("Operations Analyst", &["Spreadsheets", "Process improvement", "Data literacy", "Documentation", "Attention to detail"]),
        ("Teacher or Trainer", &["Public speaking", "Curriculum design", "Patience", "Assessment", "Mentoring"]),
    ],
    outlook: "Transferable skills open doors across industries; focus on building a visible track record.",
    salary: ["6-10 million VND", "10-18 million VND", "18-30 million VND", "30-45 million VND"],
    companies: &["Vingroup", "Viettel", "FPT Corporation", "Masan Group"],
};

const TRACKS: &[&Track] = &[&TECHNOLOGY, &BUSINESS, &DESIGN];

fn track_for(text: &str) -> &'static Track {
    let text = text.to_lowercase();
    TRACKS
        .iter()
        .find(|track| track.keywords.iter().any(|kw| text.contains(kw)))
        .copied()
        .unwrap_or(&GENERAL)
}

/// Deterministic career advice derived from the major and skills alone.
pub fn mock_career_advice(major: &str, skills: &[String]) -> CareerAdvice {
    let track = track_for(major);
    let strengths = if skills.is_empty() {
        "your strengths".to_string()
    } else {
        skills.join(", ")
    };

    let career_paths = track
        .careers
        .iter()
        .map(|(title, required)| CareerPathEntry {
            title: title.to_string(),
            description: format!(
                "{title} builds directly on a {major} background and puts {strengths} to work every day."
            ),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            next_steps: vec![
                format!("Take an introductory course on {}", required[0]),
                format!("Build a small portfolio project as a {title}"),
                format!("Talk to two people working as a {title}"),
            ],
            outlook: track.outlook.to_string(),
        })
        .collect();

    CareerAdvice::Current(CurrentAdvice {
        career_paths,
        general_advice: format!(
            "These suggestions were prepared offline from your major ({major}) and skills ({strengths}). \
             Try again later for personalized AI recommendations."
        ),
    })
}

/// Deterministic market analysis keyed on the career path.
pub fn mock_market_analysis(career_path: &str) -> MarketAnalysis {
    let track = track_for(career_path);
    MarketAnalysis {
        growth_potential: format!(
            "{career_path}: {} (offline estimate, not live market data)",
            track.outlook
        ),
        required_skills: track.careers[0].1.iter().map(|s| s.to_string()).collect(),
        salary_range: Some(SalaryRange {
            junior: track.salary[0].to_string(),
            mid_level: track.salary[1].to_string(),
            senior: track.salary[2].to_string(),
            tech_lead: track.salary[3].to_string(),
        }),
        top_companies: track.companies.iter().map(|s| s.to_string()).collect(),
    }
}
