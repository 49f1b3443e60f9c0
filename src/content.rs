//! Static site content, bundled at build time. Everything here is data -
//! rendering and translation live in the components and `i18n`.

use crate::i18n::Language;

pub const NAME: &str = "Mario Moreno";
pub const EMAIL: &str = "marioivanmorenopineda@gmail.com";
pub const WHATSAPP_NUMBER: &str = "+584145364657";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/mario-moreno-9916043b";
pub const GITHUB_URL: &str = "https://github.com/Mario24874";

/// `wa.me` link for the configured number (digits only).
pub fn whatsapp_link() -> String {
    let digits: String = WHATSAPP_NUMBER.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{digits}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    About,
    Skills,
    Projects,
    Demos,
    Apps,
    Contact,
}

pub const NAV_ITEMS: &[(&str, NavKey)] = &[
    ("#about", NavKey::About),
    ("#skills", NavKey::Skills),
    ("#projects", NavKey::Projects),
    ("#demos", NavKey::Demos),
    ("#mobile-apps", NavKey::Apps),
    ("#contact", NavKey::Contact),
];

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        skills: &[
            "HTML", "CSS", "JavaScript", "TypeScript", "Java", "Python", "C", "C++", "C#", "PHP",
            "SQL", "Rust",
        ],
    },
    SkillCategory {
        title: "APIs & Frameworks",
        skills: &[
            "React.JS",
            "Angular.JS",
            "Vue.JS",
            "Node.js (Express.JS)",
            "Spring Boot (Java)",
            "Django REST (Python)",
            "Flask (Python)",
            "Symfony (PHP)",
            "Laravel (PHP)",
            "ASP.NET Core",
            "Ruby on Rails",
            "Leptos (Rust)",
        ],
    },
    SkillCategory {
        title: "Development & Operations",
        skills: &[
            "Web Development",
            "Multiplatform Mobile Apps",
            "Version Control (Git)",
            "Container Management (Docker)",
            "Orchestration (Kubernetes)",
            "Server Management",
            "Database Management",
            "Cloud Services (AWS, Azure, GCP)",
        ],
    },
    SkillCategory {
        title: "Automation & AI",
        skills: &[
            "n8n",
            "Flowise",
            "Make (Integromat)",
            "Conversational Agents",
            "Chatbots",
            "Virtual Assistants",
            "AI Integration",
        ],
    },
    SkillCategory {
        title: "Business & Marketing",
        skills: &[
            "SEO (Search Engine Optimization)",
            "ERP (Enterprise Resource Planning)",
            "Social Media Management",
        ],
    },
    SkillCategory {
        title: "Soft & Organizational Skills",
        skills: &[
            "Problem Solving",
            "Teamwork & Collaboration",
            "Human Resources Management",
            "Agile Methodologies (Scrum, Kanban)",
        ],
    },
];

pub const LANGUAGE_SKILLS: SkillCategory = SkillCategory {
    title: "Language Proficiency",
    skills: &[
        "Spanish (Native)",
        "English (Intermediate)",
        "Italian (Intermediate)",
    ],
};

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image_url: &'static str,
    pub live_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "proj1",
        title: "Italianto",
        description: "A complete platform for learning Italian language and culture, with tutorials, exercises, online classes and AI tutors.",
        technologies: &[
            "React", "Node.js", "TypeScript", "Python (for AI)", "n8n", "PostgreSQL", "Docker",
        ],
        image_url: "/images/logo_Italianto.png",
        live_url: Some("#"),
        repo_url: Some("#"),
    },
    Project {
        id: "proj2",
        title: "Antyquim",
        description: "A scalable e-commerce website with product listings, shopping cart, user authentication and payment gateway integration. Focused on SEO optimization and responsive design.",
        technologies: &["Vue.js", "Symfony (PHP)", "MySQL", "Stripe API", "Tailwind CSS"],
        image_url: "/images/LogoAntyquimRSF.png",
        live_url: Some("#"),
        repo_url: None,
    },
    Project {
        id: "proj3",
        title: "UrbanDrive",
        description: "Cross-platform mobile application for urban driver management and fleet control, with real-time collaboration, notifications and offline capabilities.",
        technologies: &["React", "Firebase", "TypeScript", "Jest"],
        image_url: "/images/UrbanDrive.png",
        live_url: None,
        repo_url: Some("#"),
    },
    Project {
        id: "proj4",
        title: "EduManager",
        description: "Web-based dashboard for visualizing and analyzing large datasets, leveraging cloud services for processing and storage.",
        technologies: &["Angular", "Spring Boot (Java)", "AWS (S3, Redshift)", "D3.js", "REST APIs"],
        image_url: "/images/LogoEduManager.jpeg",
        live_url: Some("#"),
        repo_url: None,
    },
];

pub struct MobileApp {
    pub name: &'static str,
    pub description: &'static str,
    pub description_es: &'static str,
    pub category: &'static str,
    pub category_es: &'static str,
    pub features: &'static [&'static str],
    pub features_es: &'static [&'static str],
    pub download_url: Option<&'static str>,
}

impl MobileApp {
    pub fn description(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.description,
            Language::Es => self.description_es,
        }
    }

    pub fn category(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.category,
            Language::Es => self.category_es,
        }
    }

    pub fn features(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::En => self.features,
            Language::Es => self.features_es,
        }
    }
}

pub const MOBILE_APPS: &[MobileApp] = &[
    MobileApp {
        name: "UrbanDriveApp",
        description: "Mobile APK version of the urban driver management and fleet control application. Real-time location tracking, interactive maps, internal messaging, and GPS for taxi drivers and vehicle fleets.",
        description_es: "Versión APK móvil de la aplicación de gestión de conductores urbanos y control de flotas. Seguimiento de ubicación en tiempo real, mapas interactivos, mensajería interna y GPS para taxistas y flotas de vehículos.",
        category: "Transportation",
        category_es: "Transporte",
        features: &[
            "Real-time Driver Location Tracking",
            "Interactive Map with GPS",
            "Internal Messaging System",
            "Fleet Vehicle Management & Route Tracking",
        ],
        features_es: &[
            "Seguimiento en Tiempo Real de Conductores",
            "Mapa Interactivo con GPS",
            "Sistema de Mensajería Interna",
            "Gestión de Flotas y Seguimiento de Rutas",
        ],
        download_url: Some("#"),
    },
    MobileApp {
        name: "ItaliantoApp",
        description: "Master Italian with ease! Translate words and phrases from English and Spanish to Italian, conjugate regular and irregular verbs, and practice pronunciation with AI-powered scoring.",
        description_es: "¡Domina el italiano con facilidad! Traduce palabras y frases del inglés y español al italiano, conjuga verbos regulares e irregulares, y practica la pronunciación con puntuación impulsada por IA.",
        category: "Education",
        category_es: "Educación",
        features: &[
            "English/Spanish to Italian Translation",
            "Verb Conjugation Tool",
            "Pronunciation Practice with AI Scoring",
            "Offline Learning Mode",
        ],
        features_es: &[
            "Traducción de Inglés/Español a Italiano",
            "Herramienta de Conjugación de Verbos",
            "Práctica de Pronunciación con Puntuación IA",
            "Modo de Aprendizaje Sin Conexión",
        ],
        download_url: None,
    },
    MobileApp {
        name: "BTU Calculator",
        description: "Calculate the BTUs needed to cool any space with air conditioning equipment. Essential tool for technicians and users.",
        description_es: "Calcula los BTUs necesarios para enfriar cualquier espacio con equipos de aire acondicionado. Herramienta esencial para técnicos y usuarios.",
        category: "Tools",
        category_es: "Herramientas",
        features: &[
            "Precise BTU calculation",
            "Intuitive interface",
            "Multiple units of measurement",
            "Recommendation guide",
        ],
        features_es: &[
            "Cálculo preciso de BTU",
            "Interfaz intuitiva",
            "Múltiples unidades de medida",
            "Guía de recomendaciones",
        ],
        download_url: Some("#"),
    },
];

/// A demo-store product. `price` is mutated in place by the command
/// interpreter's output during a session; `original_price` is the immutable
/// baseline every computation anchors on. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub name_es: &'static str,
    pub price: u64,
    pub original_price: u64,
    pub image: &'static str,
    pub background: &'static str,
    pub specs: &'static [&'static str],
    pub specs_es: &'static [&'static str],
    pub durability: u8,
}

impl Product {
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.name,
            Language::Es => self.name_es,
        }
    }

    pub fn specs(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::En => self.specs,
            Language::Es => self.specs_es,
        }
    }
}

/// Seed products for the virtual store demo, fresh on every mount.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "AI NEURAL PROCESSOR",
            name_es: "PROCESADOR NEURAL IA",
            price: 2999,
            original_price: 2999,
            image: "https://res.cloudinary.com/muhammederdem/image/upload/q_60/v1536405217/starwars/item-1.webp",
            background: "https://res.cloudinary.com/muhammederdem/image/upload/q_60/v1536405222/starwars/item-1-bg.webp",
            specs: &["GPU CORES: 10,000", "MEMORY: 128GB"],
            specs_es: &["NÚCLEOS GPU: 10,000", "MEMORIA: 128GB"],
            durability: 95,
        },
        Product {
            id: 2,
            name: "QUANTUM LAPTOP",
            name_es: "LAPTOP CUÁNTICA",
            price: 4599,
            original_price: 4599,
            image: "https://res.cloudinary.com/muhammederdem/image/upload/q_60/v1536405217/starwars/item-2.webp",
            background: "https://res.cloudinary.com/muhammederdem/image/upload/q_60/v1536405222/starwars/item-2-bg.webp",
            specs: &["QUANTUM CORES: 256", "HOLOGRAPHIC DISPLAY"],
            specs_es: &["NÚCLEOS CUÁNTICOS: 256", "PANTALLA HOLOGRÁFICA"],
            durability: 88,
        },
        Product {
            id: 3,
            name: "AI SMART DRONE",
            name_es: "DRONE INTELIGENTE IA",
            price: 1899,
            original_price: 1899,
            image: "https://res.cloudinary.com/muhammederdem/image/upload/q_60/v1536405218/starwars/item-3.webp",
            background: "https://res.cloudinary.com/muhammederdem/image/upload/q_60/v1536405215/starwars/item-3-bg.webp",
            specs: &["FLIGHT TIME: 4H", "AI RECOGNITION"],
            specs_es: &["TIEMPO VUELO: 4H", "RECONOCIMIENTO IA"],
            durability: 92,
        },
        Product {
            id: 4,
            name: "VR HEADSET PRO",
            name_es: "CASCO VR PROFESIONAL",
            price: 1299,
            original_price: 1299,
            image: "https://res.cloudinary.com/muhammederdem/image/upload/q_60/v1536405215/starwars/item-4.webp",
            background: "https://res.cloudinary.com/muhammederdem/image/upload/q_60/v1536405223/starwars/item-4-bg.webp",
            specs: &["RESOLUTION: 8K", "REFRESH: 240Hz"],
            specs_es: &["RESOLUCIÓN: 8K", "REFRESCO: 240Hz"],
            durability: 85,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_keeps_digits_only() {
        assert_eq!(whatsapp_link(), "https://wa.me/584145364657");
    }

    #[test]
    fn demo_products_start_at_their_baseline() {
        for p in demo_products() {
            assert_eq!(p.price, p.original_price);
        }
    }
}
