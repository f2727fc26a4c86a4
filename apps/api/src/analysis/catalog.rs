//! Skill catalog — lowercase phrases matched against resume text.

pub const TECHNICAL_SKILLS: &[&str] = &[
    // Programming languages
    "python", "javascript", "java", "c++", "c#", "php", "ruby", "go", "rust", "swift",
    "kotlin", "typescript", "scala", "r", "matlab", "perl", "lua", "dart", "elixir",
    // Web
    "html", "css", "react", "angular", "vue", "nodejs", "express", "django", "flask",
    "laravel", "spring", "asp.net", "jquery", "bootstrap", "sass", "less", "webpack",
    "babel", "npm", "yarn", "gulp", "grunt",
    // Databases
    "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "sqlite", "oracle",
    "sql server", "cassandra", "dynamodb", "firebase", "neo4j",
    // Cloud & DevOps
    "aws", "azure", "google cloud", "gcp", "docker", "kubernetes", "jenkins", "terraform",
    "ansible", "puppet", "chef", "vagrant", "git", "github", "gitlab", "bitbucket",
    "ci/cd", "devops",
    // Data & AI
    "machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn",
    "pandas", "numpy", "matplotlib", "seaborn", "jupyter", "apache spark", "hadoop",
    "data analysis", "data science", "artificial intelligence", "nlp", "computer vision",
    // Mobile
    "android", "ios", "react native", "flutter", "xamarin", "cordova", "ionic",
    // Testing
    "unit testing", "integration testing", "jest", "pytest", "selenium", "cypress",
    "mocha", "jasmine", "tdd", "bdd",
    // Other
    "rest api", "graphql", "microservices", "agile", "scrum", "kanban", "jira",
    "confluence", "slack", "linux", "unix", "bash", "powershell", "vim", "emacs",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "teamwork",
    "communication",
    "problem solving",
    "critical thinking",
    "project management",
    "time management",
    "analytical thinking",
    "creativity",
    "adaptability",
    "collaboration",
    "mentoring",
    "presentation",
    "negotiation",
];

pub const ACTION_VERBS: &[&str] = &[
    "developed",
    "created",
    "implemented",
    "designed",
    "built",
    "managed",
    "led",
    "optimized",
    "improved",
    "automated",
    "deployed",
];

pub const MODERN_TECH: &[&str] = &[
    "cloud",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "react",
    "vue",
    "angular",
];

pub fn is_catalog_skill(word: &str) -> bool {
    TECHNICAL_SKILLS.contains(&word) || SOFT_SKILLS.contains(&word)
}
