//! Fixed pools backing the synthetic data generator: identities,
//! organizational attributes, role-conditioned profile data, feedback and
//! goal template text. All selection happens through the caller's
//! `GeneratorContext`; nothing here draws randomness on its own.

use crate::models::development::GoalCategory;
use crate::models::employee::Role;
use crate::models::performance::Sentiment;

pub const DEPARTMENTS: [&str; 5] = ["Engineering", "Product", "Data Science", "Platform", "Mobile"];

pub const MANAGERS: [&str; 5] = [
    "Sarah Johnson",
    "Michael Chen",
    "Priya Patel",
    "David Rodriguez",
    "Emma Wilson",
];

pub const FIRST_NAMES: [&str; 24] = [
    "James", "Maria", "Wei", "Aisha", "Carlos", "Yuki", "Elena", "Raj", "Sofia", "Omar", "Nina",
    "Lucas", "Fatima", "Daniel", "Ingrid", "Kwame", "Hana", "Pablo", "Leila", "Viktor", "Amara",
    "Tomas", "Mei", "Andre",
];

pub const LAST_NAMES: [&str; 24] = [
    "Smith", "Garcia", "Chen", "Okafor", "Martinez", "Tanaka", "Petrova", "Sharma", "Rossi",
    "Hassan", "Kowalski", "Silva", "Ahmed", "Kim", "Larsen", "Mensah", "Sato", "Alvarez",
    "Haddad", "Novak", "Diallo", "Vargas", "Lin", "Dubois",
];

const SDE_SKILLS: [&str; 17] = [
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "Go",
    "AWS",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "System Design",
    "Microservices",
    "Database Design",
    "Algorithms",
    "Data Structures",
    "Testing",
];

const PM_SKILLS: [&str; 17] = [
    "Requirements Analysis",
    "User Research",
    "A/B Testing",
    "Roadmapping",
    "Stakeholder Management",
    "Market Analysis",
    "Competitive Analysis",
    "Data Analysis",
    "User Stories",
    "Agile",
    "Scrum",
    "Kanban",
    "Prioritization",
    "Product Strategy",
    "Go-to-Market",
    "OKRs",
    "KPIs",
];

const ML_SKILLS: [&str; 17] = [
    "Python",
    "TensorFlow",
    "PyTorch",
    "Scikit-learn",
    "Deep Learning",
    "NLP",
    "Computer Vision",
    "Recommendation Systems",
    "Data Pipeline",
    "Feature Engineering",
    "Model Deployment",
    "MLOps",
    "A/B Testing",
    "Statistical Analysis",
    "Big Data",
    "Spark",
    "Data Visualization",
];

pub fn skills_for(role: Role) -> &'static [&'static str] {
    match role {
        Role::Sde => &SDE_SKILLS,
        Role::ProductManager => &PM_SKILLS,
        Role::MlEngineer => &ML_SKILLS,
    }
}

const SDE_EDUCATION: [&str; 6] = [
    "BS in Computer Science",
    "MS in Software Engineering",
    "BS in Computer Engineering",
    "Self-taught Developer",
    "Bootcamp Graduate",
    "PhD in Computer Science",
];

const PM_EDUCATION: [&str; 7] = [
    "MBA",
    "BS in Business",
    "MS in Product Management",
    "BS in Computer Science",
    "MS in HCI",
    "BS in Psychology",
    "MS in Marketing",
];

const ML_EDUCATION: [&str; 6] = [
    "MS in Machine Learning",
    "PhD in Computer Science",
    "MS in Data Science",
    "BS in Statistics",
    "MS in Artificial Intelligence",
    "PhD in Mathematics",
];

pub fn education_for(role: Role) -> &'static [&'static str] {
    match role {
        Role::Sde => &SDE_EDUCATION,
        Role::ProductManager => &PM_EDUCATION,
        Role::MlEngineer => &ML_EDUCATION,
    }
}

const SDE_COMPANIES: [&str; 10] = [
    "Google", "Microsoft", "Amazon", "Facebook", "Apple", "Netflix", "Uber", "Airbnb", "Stripe",
    "Square",
];

const PM_COMPANIES: [&str; 10] = [
    "Google",
    "Microsoft",
    "Amazon",
    "Facebook",
    "Apple",
    "Salesforce",
    "Adobe",
    "Slack",
    "Atlassian",
    "Dropbox",
];

const ML_COMPANIES: [&str; 10] = [
    "Google Brain",
    "DeepMind",
    "OpenAI",
    "Microsoft Research",
    "Amazon Science",
    "Facebook AI",
    "Apple ML",
    "Nvidia",
    "IBM Watson",
    "Anthropic",
];

pub fn previous_companies_for(role: Role) -> &'static [&'static str] {
    match role {
        Role::Sde => &SDE_COMPANIES,
        Role::ProductManager => &PM_COMPANIES,
        Role::MlEngineer => &ML_COMPANIES,
    }
}

const SDE_FEEDBACK_POSITIVE: [&str; 7] = [
    "Consistently delivers high-quality code with excellent test coverage.",
    "Great at breaking down complex technical problems into manageable tasks.",
    "Takes ownership of issues and works diligently to resolve them.",
    "Proactively identifies and addresses technical debt.",
    "Excellent code reviewer who provides thorough and constructive feedback.",
    "Demonstrates exceptional understanding of system architecture.",
    "Consistently writes well-documented and maintainable code.",
];

const SDE_FEEDBACK_NEGATIVE: [&str; 7] = [
    "Need to improve code documentation for better maintainability.",
    "Should focus on writing more unit tests to prevent regressions.",
    "Sometimes takes too long to complete tasks due to overengineering.",
    "Could improve communication around technical roadblocks.",
    "Should be more open to alternative technical approaches.",
    "Code reviews often lack depth and miss important issues.",
    "Struggles with estimating task complexity and time requirements.",
];

const SDE_FEEDBACK_NEUTRAL: [&str; 7] = [
    "Continues to develop technical skills at an expected pace.",
    "Maintains consistent performance in coding tasks.",
    "Works well within established patterns and practices.",
    "Follows team processes adequately.",
    "Communicates technical concepts effectively to the team.",
    "Balances technical debt against feature development.",
    "Participates appropriately in design discussions.",
];

const PM_FEEDBACK_POSITIVE: [&str; 7] = [
    "Excellent at gathering and synthesizing stakeholder requirements.",
    "Maintains a clear product vision and effectively communicates it.",
    "Makes data-driven decisions that positively impact product metrics.",
    "Great at prioritizing features based on business impact and technical constraints.",
    "Builds strong relationships with cross-functional teams.",
    "Demonstrates exceptional market awareness and competitive insight.",
    "User research methods consistently yield valuable product insights.",
];

const PM_FEEDBACK_NEGATIVE: [&str; 7] = [
    "Product requirements often lack necessary details for implementation.",
    "Needs to improve on setting realistic deadlines for features.",
    "Should gather more user feedback before finalizing product decisions.",
    "Could improve on technical understanding to better collaborate with engineering.",
    "Tends to change requirements too frequently during development.",
    "Prioritization decisions sometimes seem arbitrary rather than data-driven.",
    "Stakeholder management needs attention, particularly with conflicting priorities.",
];

const PM_FEEDBACK_NEUTRAL: [&str; 7] = [
    "Maintains a balanced approach to feature prioritization.",
    "Documents requirements with adequate detail for implementation.",
    "Collaborates effectively with most stakeholders.",
    "Demonstrates understanding of product metrics and their impact.",
    "Responds appropriately to changing market conditions.",
    "Roadmap planning aligns with overall company strategy.",
    "User story creation follows established team templates and processes.",
];

const ML_FEEDBACK_POSITIVE: [&str; 7] = [
    "Excellent at selecting appropriate models for specific business problems.",
    "Creates robust data pipelines that handle edge cases well.",
    "Effectively balances model accuracy with computational efficiency.",
    "Exceptional at explaining complex ML concepts to non-technical stakeholders.",
    "Consistently improves model performance through thoughtful experimentation.",
    "Deep understanding of the latest research relevant to our business problems.",
    "Excellent at identifying and correcting bias in training data.",
];

const ML_FEEDBACK_NEGATIVE: [&str; 7] = [
    "Should improve monitoring of models in production for performance degradation.",
    "Needs to document experimental results more thoroughly.",
    "Could improve on validating data quality before model training.",
    "Should consider implementation complexity when selecting modeling approaches.",
    "Model evaluation metrics don't always align with business objectives.",
    "Tends to overoptimize models before validating problem-solution fit.",
    "Needs to improve communication of model limitations to stakeholders.",
];

const ML_FEEDBACK_NEUTRAL: [&str; 7] = [
    "Follows established best practices for model development.",
    "Documents experiments with sufficient detail for reproducibility.",
    "Adequately validates models before deployment.",
    "Maintains awareness of current research relevant to our problems.",
    "Balances innovation with practical business constraints.",
    "Model releases follow established team protocols.",
    "Data preprocessing meets team quality standards.",
];

pub fn feedback_templates(role: Role, sentiment: Sentiment) -> &'static [&'static str] {
    match (role, sentiment) {
        (Role::Sde, Sentiment::Positive) => &SDE_FEEDBACK_POSITIVE,
        (Role::Sde, Sentiment::Negative) => &SDE_FEEDBACK_NEGATIVE,
        (Role::Sde, Sentiment::Neutral) => &SDE_FEEDBACK_NEUTRAL,
        (Role::ProductManager, Sentiment::Positive) => &PM_FEEDBACK_POSITIVE,
        (Role::ProductManager, Sentiment::Negative) => &PM_FEEDBACK_NEGATIVE,
        (Role::ProductManager, Sentiment::Neutral) => &PM_FEEDBACK_NEUTRAL,
        (Role::MlEngineer, Sentiment::Positive) => &ML_FEEDBACK_POSITIVE,
        (Role::MlEngineer, Sentiment::Negative) => &ML_FEEDBACK_NEGATIVE,
        (Role::MlEngineer, Sentiment::Neutral) => &ML_FEEDBACK_NEUTRAL,
    }
}

const SDE_TOPICS: [&str; 12] = [
    "code quality",
    "technical skills",
    "code review",
    "testing",
    "architecture",
    "documentation",
    "estimation",
    "collaboration",
    "problem-solving",
    "technical debt",
    "mentoring",
    "communication",
];

const PM_TOPICS: [&str; 12] = [
    "requirements",
    "communication",
    "vision",
    "stakeholder management",
    "prioritization",
    "data analysis",
    "user research",
    "market analysis",
    "roadmapping",
    "feature definition",
    "technical understanding",
    "execution",
];

const ML_TOPICS: [&str; 12] = [
    "model quality",
    "experimentation",
    "algorithm selection",
    "data pipeline",
    "model deployment",
    "data quality",
    "research",
    "technical documentation",
    "performance optimization",
    "validation",
    "interpretability",
    "collaboration",
];

pub fn feedback_topics(role: Role) -> &'static [&'static str] {
    match role {
        Role::Sde => &SDE_TOPICS,
        Role::ProductManager => &PM_TOPICS,
        Role::MlEngineer => &ML_TOPICS,
    }
}

/// Substitution pools for the light templating in feedback text.
pub const SUBSYSTEMS: [&str; 7] = [
    "authentication",
    "payment",
    "notification",
    "dashboard",
    "API",
    "database",
    "caching",
];

pub const STAKEHOLDER_GROUPS: [&str; 6] = [
    "marketing team",
    "sales team",
    "engineering team",
    "executives",
    "customer success",
    "design team",
];

pub const MODEL_FAMILIES: [&str; 6] = [
    "recommendation models",
    "forecasting models",
    "classification models",
    "clustering algorithms",
    "NLP models",
    "computer vision models",
];

const SDE_RECOMMENDATION_TITLES: [&str; 3] = [
    "Technical Skill Development Pathway",
    "Code Quality Enhancement Plan",
    "Architecture Knowledge Expansion",
];

const PM_RECOMMENDATION_TITLES: [&str; 3] = [
    "Strategic Product Thinking Enhancement",
    "User Research Skill Development",
    "Cross-functional Leadership Growth",
];

const ML_RECOMMENDATION_TITLES: [&str; 3] = [
    "Advanced Modeling Techniques Pathway",
    "Model Deployment Skill Enhancement",
    "Data Pipeline Optimization Learning",
];

pub fn recommendation_titles(role: Role) -> &'static [&'static str] {
    match role {
        Role::Sde => &SDE_RECOMMENDATION_TITLES,
        Role::ProductManager => &PM_RECOMMENDATION_TITLES,
        Role::MlEngineer => &ML_RECOMMENDATION_TITLES,
    }
}

pub fn recommendation_description(role: Role, name: &str, index: usize) -> String {
    match role {
        Role::Sde => match index {
            0 => format!(
                "Based on {name}'s performance, we recommend focusing on advanced system design principles through our internal tech talks and external courses."
            ),
            1 => format!(
                "{name} would benefit from our advanced testing workshop series to further enhance code quality and reliability."
            ),
            _ => format!(
                "We recommend {name} participate in the upcoming microservices architecture workshop to expand technical breadth."
            ),
        },
        Role::ProductManager => match index {
            0 => format!(
                "{name} should consider enrollment in our advanced user research workshop to strengthen customer insights generation."
            ),
            1 => format!(
                "Based on performance data, we recommend {name} focus on our data-driven decision making course to enhance product strategy."
            ),
            _ => format!(
                "{name} would benefit from our cross-functional leadership program to further develop stakeholder management skills."
            ),
        },
        Role::MlEngineer => match index {
            0 => format!(
                "We recommend {name} participate in our advanced model optimization workshop to enhance model performance skills."
            ),
            1 => format!(
                "{name} should consider our MLOps certification program to strengthen the deployment and monitoring of models."
            ),
            _ => format!(
                "Based on current skills, {name} would benefit from our distributed computing for ML workshop to handle larger datasets."
            ),
        },
    }
}

const SDE_RECOMMENDATION_METRICS: [&str; 4] = [
    "Code Quality",
    "Velocity",
    "Bugs Introduced",
    "On-Time Delivery",
];

const PM_RECOMMENDATION_METRICS: [&str; 3] = [
    "Stakeholder Satisfaction",
    "Requirement Quality",
    "Feature Delivery Rate",
];

const ML_RECOMMENDATION_METRICS: [&str; 4] = [
    "Model Accuracy",
    "Experiment Velocity",
    "Data Quality",
    "Pipeline Uptime",
];

pub fn recommendation_metrics(role: Role) -> &'static [&'static str] {
    match role {
        Role::Sde => &SDE_RECOMMENDATION_METRICS,
        Role::ProductManager => &PM_RECOMMENDATION_METRICS,
        Role::MlEngineer => &ML_RECOMMENDATION_METRICS,
    }
}

/// Per-role goal category rotation; plans cycle through this order.
pub fn goal_category_order(role: Role) -> [GoalCategory; 4] {
    match role {
        Role::Sde => [
            GoalCategory::Technical,
            GoalCategory::Technical,
            GoalCategory::Soft,
            GoalCategory::Leadership,
        ],
        Role::ProductManager => [
            GoalCategory::Domain,
            GoalCategory::Soft,
            GoalCategory::Leadership,
            GoalCategory::Technical,
        ],
        Role::MlEngineer => [
            GoalCategory::Technical,
            GoalCategory::Domain,
            GoalCategory::Technical,
            GoalCategory::Soft,
        ],
    }
}

pub fn goal_titles(role: Role, category: GoalCategory) -> &'static [&'static str] {
    match (role, category) {
        (Role::Sde, GoalCategory::Technical) => &[
            "Master Advanced System Design Patterns",
            "Implement Microservice Architecture",
            "Achieve AWS Solutions Architect Certification",
            "Develop Expertise in Kubernetes Orchestration",
        ],
        (Role::Sde, GoalCategory::Soft) => &[
            "Improve Technical Documentation Skills",
            "Enhance Code Review Communication",
            "Develop Mentoring Capabilities",
            "Strengthen Cross-functional Collaboration",
        ],
        (Role::Sde, GoalCategory::Leadership) => &[
            "Lead a Technical Initiative",
            "Mentor Junior Developers",
            "Drive Technical Decision Making",
            "Establish Technical Best Practices",
        ],
        (Role::Sde, GoalCategory::Domain) => &[
            "Deepen Financial Domain Knowledge",
            "Understand Healthcare Compliance Requirements",
            "Master E-commerce Business Logic",
            "Study Telecommunications Industry Standards",
        ],
        (Role::ProductManager, GoalCategory::Technical) => &[
            "Develop Data Analysis Proficiency",
            "Learn Basic Frontend Development",
            "Master Product Analytics Tools",
            "Understand CI/CD Pipelines",
        ],
        (Role::ProductManager, GoalCategory::Soft) => &[
            "Enhance Stakeholder Communication",
            "Improve Presentation Skills",
            "Develop Negotiation Techniques",
            "Strengthen Team Collaboration",
        ],
        (Role::ProductManager, GoalCategory::Leadership) => &[
            "Lead Cross-functional Initiative",
            "Develop Strategic Product Vision",
            "Drive Product Organization",
            "Establish Product Development Process",
        ],
        (Role::ProductManager, GoalCategory::Domain) => &[
            "Deepen Market Analysis Skills",
            "Master Competitive Analysis",
            "Develop User Research Expertise",
            "Strengthen Business Case Development",
        ],
        (Role::MlEngineer, GoalCategory::Technical) => &[
            "Master Advanced Deep Learning Techniques",
            "Implement MLOps Best Practices",
            "Develop Expertise in Distributed ML",
            "Learn Reinforcement Learning Applications",
        ],
        (Role::MlEngineer, GoalCategory::Soft) => &[
            "Improve Technical Documentation",
            "Enhance Model Explanation Skills",
            "Develop Cross-functional Communication",
            "Strengthen Data Storytelling",
        ],
        (Role::MlEngineer, GoalCategory::Leadership) => &[
            "Lead ML Model Development",
            "Mentor Junior ML Engineers",
            "Drive ML Strategy Definition",
            "Establish ML Best Practices",
        ],
        (Role::MlEngineer, GoalCategory::Domain) => &[
            "Deepen NLP Domain Knowledge",
            "Master Computer Vision Applications",
            "Understand Time Series Analysis",
            "Study Recommendation Systems",
        ],
    }
}

pub fn goal_descriptions(role: Role, category: GoalCategory) -> &'static [&'static str] {
    match (role, category) {
        (Role::Sde, GoalCategory::Technical) => &[
            "Complete the advanced system design course and apply patterns to at least one production project.",
            "Refactor monolithic component into microservices architecture following best practices.",
            "Obtain AWS Solutions Architect certification through study and exam completion.",
            "Deploy and manage production workloads using Kubernetes with proper monitoring and scaling.",
        ],
        (Role::Sde, GoalCategory::Soft) => &[
            "Improve documentation quality by creating comprehensive guides for at least 3 key systems.",
            "Provide constructive feedback in code reviews that elevates team standards without causing friction.",
            "Mentor 2 junior developers on specific technical areas through pair programming sessions.",
            "Successfully collaborate with product and design teams to deliver 3 major features on schedule.",
        ],
        (Role::Sde, GoalCategory::Leadership) => &[
            "Lead the implementation of a significant technical initiative that impacts multiple teams.",
            "Establish a mentoring relationship with 2-3 junior developers and track their progress.",
            "Make key technical decisions for a project and document the decision-making process.",
            "Document and implement technical best practices that are adopted by the broader team.",
        ],
        (Role::Sde, GoalCategory::Domain) => &[
            "Work with domain experts to understand financial regulations impacting our systems.",
            "Complete HIPAA compliance training and apply guidelines to healthcare-related features.",
            "Map the customer journey for key e-commerce flows and optimize the technical implementation.",
            "Research telecommunications standards and ensure our systems are compliant.",
        ],
        (Role::ProductManager, GoalCategory::Technical) => &[
            "Complete SQL training and independently analyze product metrics to drive decisions.",
            "Learn HTML/CSS/JavaScript fundamentals to better collaborate with frontend teams.",
            "Become proficient in Amplitude/Mixpanel to independently track product performance.",
            "Understand deployment processes to better coordinate releases and feature flags.",
        ],
        (Role::ProductManager, GoalCategory::Soft) => &[
            "Develop structured communication frameworks for different stakeholder groups.",
            "Create and deliver compelling product presentations to executive leadership.",
            "Successfully negotiate feature priorities with multiple stakeholder groups.",
            "Facilitate productive cross-functional team meetings with clear outcomes.",
        ],
        (Role::ProductManager, GoalCategory::Leadership) => &[
            "Lead initiative requiring coordination across engineering, design, and marketing teams.",
            "Develop and present a long-term product vision that gains executive support.",
            "Establish product team processes that improve delivery predictability by 20%.",
            "Create and implement a product development framework adopted by other PMs.",
        ],
        (Role::ProductManager, GoalCategory::Domain) => &[
            "Conduct comprehensive market analysis identifying key opportunities for product growth.",
            "Create detailed competitive analysis framework tracking 5 key competitors quarterly.",
            "Conduct 20 user interviews and synthesize insights into actionable product improvements.",
            "Develop ROI model for major features that accurately predicts business impact.",
        ],
        (Role::MlEngineer, GoalCategory::Technical) => &[
            "Implement and evaluate three advanced deep learning architectures for our specific use case.",
            "Establish automated ML pipeline with continuous training, validation, and deployment.",
            "Configure distributed training across GPU cluster to reduce training time by 40%.",
            "Develop reinforcement learning model for dynamic optimization problem.",
        ],
        (Role::MlEngineer, GoalCategory::Soft) => &[
            "Create comprehensive documentation for all production ML models including limitations.",
            "Develop framework for explaining model decisions to non-technical stakeholders.",
            "Successfully collaborate with product teams to align ML capabilities with business needs.",
            "Create visualizations that effectively communicate complex data patterns to the business.",
        ],
        (Role::MlEngineer, GoalCategory::Leadership) => &[
            "Lead development of new ML model from research through production deployment.",
            "Establish mentoring program for junior ML engineers focusing on practical implementation.",
            "Define ML roadmap for a key product area with measurable objectives.",
            "Document model development standards that are adopted by the ML team.",
        ],
        (Role::MlEngineer, GoalCategory::Domain) => &[
            "Implement state-of-the-art NLP techniques to improve text processing capabilities.",
            "Develop computer vision models that achieve 95%+ accuracy for our specific use cases.",
            "Create time series forecasting models that outperform current solutions by 15%.",
            "Build recommendation system with improved engagement metrics vs. current solution.",
        ],
    }
}

pub fn goal_skills(role: Role, category: GoalCategory) -> &'static [&'static str] {
    match (role, category) {
        (Role::Sde, GoalCategory::Technical) => &[
            "System Design",
            "Cloud Architecture",
            "Microservices",
            "Kubernetes",
            "Docker",
            "CI/CD",
        ],
        (Role::Sde, GoalCategory::Soft) => {
            &["Documentation", "Communication", "Mentoring", "Collaboration"]
        }
        (Role::Sde, GoalCategory::Leadership) => &[
            "Project Management",
            "Mentoring",
            "Technical Direction",
            "Best Practices",
        ],
        (Role::Sde, GoalCategory::Domain) => &[
            "Financial Systems",
            "Healthcare IT",
            "E-commerce",
            "Telecommunications",
        ],
        (Role::ProductManager, GoalCategory::Technical) => {
            &["SQL", "Data Analysis", "Web Development", "Analytics"]
        }
        (Role::ProductManager, GoalCategory::Soft) => &[
            "Communication",
            "Presentation Skills",
            "Negotiation",
            "Stakeholder Management",
        ],
        (Role::ProductManager, GoalCategory::Leadership) => &[
            "Cross-functional Leadership",
            "Strategic Vision",
            "Team Management",
            "Process Development",
        ],
        (Role::ProductManager, GoalCategory::Domain) => &[
            "Market Analysis",
            "Competitive Analysis",
            "User Research",
            "Business Case Development",
        ],
        (Role::MlEngineer, GoalCategory::Technical) => &[
            "Deep Learning",
            "MLOps",
            "Distributed Computing",
            "Reinforcement Learning",
        ],
        (Role::MlEngineer, GoalCategory::Soft) => &[
            "Documentation",
            "Model Explanation",
            "Cross-functional Communication",
            "Data Visualization",
        ],
        (Role::MlEngineer, GoalCategory::Leadership) => &[
            "Project Management",
            "Mentoring",
            "Strategic Direction",
            "Best Practices",
        ],
        (Role::MlEngineer, GoalCategory::Domain) => &[
            "NLP",
            "Computer Vision",
            "Time Series Analysis",
            "Recommendation Systems",
        ],
    }
}
