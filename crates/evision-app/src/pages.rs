//! Static page content: Home, AI Chat, Innovation Score and About Us.

use evision_ai::RUBRIC;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

impl Section {
    fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}

pub const SLUGS: [&str; 4] = ["home", "chat", "score", "about"];

pub fn all() -> Vec<Page> {
    SLUGS.iter().filter_map(|slug| find(slug)).collect()
}

pub fn find(slug: &str) -> Option<Page> {
    match slug {
        "home" => Some(home()),
        "chat" => Some(chat()),
        "score" => Some(score()),
        "about" => Some(about()),
        _ => None,
    }
}

fn bullets(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn home() -> Page {
    let components = RUBRIC
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "**{}. {} ({}%)**\n{}",
                i + 1,
                c.name,
                c.weight,
                bullets(c.highlights)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    Page {
        slug: "home",
        title: "Welcome to EVision ⚡",
        subtitle: "Composite Innovation Score for Electric Vehicles - Beyond Traditional Metrics",
        sections: vec![
            Section::new("🎯 Innovation Score Components", components),
            Section::new(
                "🌟 Why EVision?",
                bullets(&[
                    "🔬 **Holistic Benchmarking**: Compare Tesla, BYD, MG, and more using composite scores",
                    "📊 **Objective Analysis**: Data-driven insights beyond marketing hype",
                    "🚀 **Future-Ready**: Evaluates innovation that matters for sustainable transportation",
                    "💡 **Smart Comparisons**: AI-powered recommendations based on your needs",
                ]),
            ),
            Section::new(
                "🚀 Get Started!",
                "Head over to the **AI Chat** section to analyze EVs or check **Innovation Scores**!",
            ),
        ],
    }
}

fn chat() -> Page {
    Page {
        slug: "chat",
        title: "EVision AI Assistant 🧠",
        subtitle: "Ask me about EV comparisons, innovation scores, or buying recommendations!",
        sections: vec![Section::new(
            "💬 Ask EVision",
            "e.g., Compare Tesla Model 3 vs BYD Seal using the Innovation Score",
        )],
    }
}

fn score() -> Page {
    let mut sections: Vec<Section> = RUBRIC
        .iter()
        .map(|c| Section::new(format!("{} ({}%)", c.name, c.weight), bullets(c.criteria)))
        .collect();
    sections.push(Section::new(
        "🎯 Example: Calculate a Score",
        "Select a brand and enter a model name (e.g., Model 3, Seal, ZS EV) to get an \
         AI-generated innovation analysis with a composite score out of 100.",
    ));

    Page {
        slug: "score",
        title: "Innovation Score Methodology 📊",
        subtitle: "🧮 How We Calculate Innovation Score",
        sections,
    }
}

fn about() -> Page {
    Page {
        slug: "about",
        title: "About EVision 🌟",
        subtitle: "EVision was created to bring **objective, data-driven analysis** to the electric vehicle market.",
        sections: vec![
            Section::new(
                "The Problem",
                bullets(&[
                    "🔋 Traditional metrics (range, price) don't tell the full story",
                    "📊 Marketing claims often overshadow real innovation",
                    "🤔 Buyers struggle to compare EVs objectively across brands",
                ]),
            ),
            Section::new(
                "Our Solution",
                "A **composite Innovation Score** that weighs technological advancement, energy \
                 efficiency, and real-world user value to create holistic benchmarks for EVs from \
                 Tesla, BYD, MG, and beyond.",
            ),
            Section::new(
                "💻 Tech Stack",
                bullets(&[
                    "**Server:** Rust (axum + tokio) ⚡",
                    "**AI Engine:** Google Gemini AI 🤖",
                    "**Focus:** Data-driven EV Analysis 🔬",
                ]),
            ),
            Section::new(
                "🎯 Project Vision",
                "**EVision aims to democratize EV knowledge** by making sophisticated analysis \
                 accessible to everyone. Whether you're a first-time buyer or an EV enthusiast, our \
                 Innovation Score helps you see beyond the marketing to understand which vehicles \
                 truly push the boundaries of electric mobility.",
            ),
            Section::new(
                "👨‍💻 Creator",
                "Developed by **Ramya**, passionate about sustainable transportation and AI \
                 innovation.\n✨ Empowering informed EV decisions through technology & data.",
            ),
        ],
    }
}
