//! Static page copy.

/// Landing gate tagline.
pub const GATE_TAGLINE: &str = "Using AI and Data to Transform Global Health.";

/// Home page headline.
pub const HOME_HEADLINE: &str = "Empowering Global Healthcare";

/// Home page tagline.
pub const HOME_TAGLINE: &str = "Live Monitoring | AI-Driven Insights | Smart Health Alerts";

/// Current travel advisories.
pub const TRAVEL_ADVISORIES: &[&str] = &[
    "Dengue outbreak in Southeast Asia",
    "COVID-19 precautions in Europe",
    "Monkeypox alerts in France, USA",
];

/// Education center entries: (disease, summary).
pub const EDUCATION_ENTRIES: &[(&str, &str)] = &[
    ("COVID-19", "Respiratory virus."),
    ("Flu", "Viral seasonal illness."),
    ("Monkeypox", "Rash and fever."),
    ("Dengue", "Mosquito-borne illness."),
];

/// About page entries: (label, value).
pub const ABOUT_ENTRIES: &[(&str, &str)] = &[
    ("Team", "Varshaan & Meetika"),
    ("Goal", "Track global disease trends"),
    ("Tech", "Rust, Ratatui, disease.sh"),
    ("Chatbot", "health assistant"),
    ("GitHub", "github.com/varshaanp/healthcare-trends-app"),
];
