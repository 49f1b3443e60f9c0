//! Static translation tables for the two supported languages, bundled at
//! build time like the rest of the site content.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Es,
            Self::Es => Self::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::Es => &ES,
        }
    }
}

/// Every user-facing string on the page, per language.
pub struct Strings {
    pub nav_about: &'static str,
    pub nav_skills: &'static str,
    pub nav_projects: &'static str,
    pub nav_demos: &'static str,
    pub nav_apps: &'static str,
    pub nav_contact: &'static str,

    pub header_welcome: &'static str,
    pub header_portfolio: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,

    pub hero_greeting: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    pub hero_view_work: &'static str,

    pub skills_title: &'static str,
    pub skills_description: &'static str,

    pub projects_title: &'static str,
    pub projects_description: &'static str,
    pub projects_view_code: &'static str,
    pub projects_live_demo: &'static str,

    pub demos_title: &'static str,
    pub demos_subtitle: &'static str,
    pub demos_description: &'static str,
    pub demos_voice_title: &'static str,
    pub demos_voice_description: &'static str,
    pub demos_chatbot_title: &'static str,
    pub demos_chatbot_description: &'static str,

    pub store_specifications: &'static str,
    pub store_quality: &'static str,
    pub store_durability_index: &'static str,
    pub store_add_to_cart: &'static str,
    pub store_placeholder: &'static str,
    pub store_processing: &'static str,
    pub store_price_updated: &'static str,
    pub store_quick_discount: &'static str,
    pub store_quick_price: &'static str,
    pub store_quick_increase: &'static str,

    pub apps_title: &'static str,
    pub apps_subtitle: &'static str,
    pub apps_description: &'static str,
    pub apps_key_features: &'static str,
    pub apps_download_here: &'static str,
    pub apps_coming_soon: &'static str,
    pub apps_available: &'static str,
    pub apps_need_custom: &'static str,
    pub apps_custom_description: &'static str,
    pub apps_discuss_project: &'static str,

    pub contact_title: &'static str,
    pub contact_description: &'static str,
    pub contact_email: &'static str,
    pub contact_whatsapp: &'static str,
    pub contact_connect_with: &'static str,
    pub contact_additional_info: &'static str,

    pub form_title: &'static str,
    pub form_name: &'static str,
    pub form_email: &'static str,
    pub form_phone: &'static str,
    pub form_message: &'static str,
    pub form_send: &'static str,
    pub form_sending: &'static str,
    pub form_success: &'static str,
    pub form_failure: &'static str,
    pub form_name_required: &'static str,
    pub form_email_invalid: &'static str,
    pub form_message_required: &'static str,

    pub chat_title: &'static str,
    pub chat_subtitle: &'static str,
    pub chat_greeting: &'static str,
    pub chat_offline: &'static str,
    pub chat_error: &'static str,
    pub chat_placeholder: &'static str,

    pub footer_rights: &'static str,
    pub footer_built_with: &'static str,
}

static EN: Strings = Strings {
    nav_about: "About",
    nav_skills: "Skills",
    nav_projects: "Projects",
    nav_demos: "AI Demos",
    nav_apps: "Mobile Apps",
    nav_contact: "Contact",

    header_welcome: "Welcome to my Portfolio!",
    header_portfolio: "Portfolio",
    theme_dark: "Dark Mode",
    theme_light: "Light Mode",

    hero_greeting: "Hello, I'm",
    hero_title: "AI Developer & Innovation Engineer",
    hero_subtitle: "Building the future with Artificial Intelligence and cutting-edge technology",
    hero_cta: "Get In Touch",
    hero_view_work: "View My Work",

    skills_title: "Skills & Technologies",
    skills_description: "My technical expertise spans multiple domains, enabling me to build comprehensive solutions from concept to deployment.",

    projects_title: "Featured Projects",
    projects_description: "Explore my latest AI-powered projects and innovative solutions",
    projects_view_code: "View Code",
    projects_live_demo: "Live Demo",

    demos_title: "AI Demos",
    demos_subtitle: "Interactive AI Agents & Virtual Assistants",
    demos_description: "Experience cutting-edge AI technology through interactive demos",
    demos_voice_title: "AI Voice Assistant",
    demos_voice_description: "This voice assistant can answer questions about my portfolio and experience.",
    demos_chatbot_title: "WhatsApp AI Chatbot",
    demos_chatbot_description: "Connect with my intelligent chatbot for instant responses about my services and projects.",

    store_specifications: "SPECIFICATIONS",
    store_quality: "QUALITY",
    store_durability_index: "DURABILITY INDEX",
    store_add_to_cart: "ADD TO CART",
    store_placeholder: "Write a command to change the price...",
    store_processing: "Processing command...",
    store_price_updated: "Price updated to",
    store_quick_discount: "20% discount",
    store_quick_price: "Lower price to $1500",
    store_quick_increase: "Increase price 10%",

    apps_title: "Mobile Applications",
    apps_subtitle: "Download and experience AI on your device",
    apps_description: "Get the best user experience with our mobile applications",
    apps_key_features: "Key Features",
    apps_download_here: "Download App Here",
    apps_coming_soon: "Coming Soon",
    apps_available: "Available",
    apps_need_custom: "Need a Custom Mobile App?",
    apps_custom_description: "I develop cutting-edge mobile applications with AI integration. Let's bring your mobile app idea to life with the latest technology.",
    apps_discuss_project: "Discuss Your Project",

    contact_title: "Let's Work Together",
    contact_description: "Ready to bring your AI ideas to life? Let's discuss your next project.",
    contact_email: "Send an Email",
    contact_whatsapp: "Chat on WhatsApp",
    contact_connect_with: "Connect with me:",
    contact_additional_info: "Feel free to reach out for collaborations, consultations, or just a friendly chat about AI and technology!",

    form_title: "Send me a message",
    form_name: "Name",
    form_email: "Email",
    form_phone: "Phone (optional)",
    form_message: "Message",
    form_send: "Send",
    form_sending: "Sending...",
    form_success: "Message sent successfully! I'll get back to you soon.",
    form_failure: "Failed to send message. Please try again.",
    form_name_required: "Name is required",
    form_email_invalid: "Valid email is required",
    form_message_required: "Message is required",

    chat_title: "AI Assistant",
    chat_subtitle: "Powered by n8n automation",
    chat_greeting: "👋 Hi! I'm Mario's AI assistant. I'm here to help with any question about his portfolio, services or AI development projects.",
    chat_offline: "The chat is temporarily offline. You can contact me directly via WhatsApp or email.",
    chat_error: "Sorry, there is a connection problem. Please try again.",
    chat_placeholder: "Write your message...",

    footer_rights: "All rights reserved",
    footer_built_with: "Built with Rust, Leptos & AI",
};

static ES: Strings = Strings {
    nav_about: "Acerca de",
    nav_skills: "Habilidades",
    nav_projects: "Proyectos",
    nav_demos: "Demos IA",
    nav_apps: "Apps Móviles",
    nav_contact: "Contacto",

    header_welcome: "¡Bienvenido a mi Portafolio!",
    header_portfolio: "Portafolio",
    theme_dark: "Modo Oscuro",
    theme_light: "Modo Claro",

    hero_greeting: "Hola, soy",
    hero_title: "Desarrollador IA e Ingeniero de Innovación",
    hero_subtitle: "Construyendo el futuro con Inteligencia Artificial y tecnología de vanguardia",
    hero_cta: "Contactar",
    hero_view_work: "Ver Mi Trabajo",

    skills_title: "Habilidades y Tecnologías",
    skills_description: "Mi experiencia técnica abarca múltiples dominios, lo que me permite construir soluciones integrales desde el concepto hasta la implementación.",

    projects_title: "Proyectos Destacados",
    projects_description: "Explora mis últimos proyectos potenciados por IA y soluciones innovadoras",
    projects_view_code: "Ver Código",
    projects_live_demo: "Demo en Vivo",

    demos_title: "Demos de IA",
    demos_subtitle: "Agentes IA Interactivos y Asistentes Virtuales",
    demos_description: "Experimenta tecnología IA de vanguardia a través de demos interactivos",
    demos_voice_title: "Asistente de Voz IA",
    demos_voice_description: "Este asistente de voz puede responder preguntas sobre mi portafolio y experiencia.",
    demos_chatbot_title: "Chatbot IA de WhatsApp",
    demos_chatbot_description: "Conéctate con mi chatbot inteligente para respuestas instantáneas sobre mis servicios y proyectos.",

    store_specifications: "ESPECIFICACIONES",
    store_quality: "CALIDAD",
    store_durability_index: "ÍNDICE DE DURABILIDAD",
    store_add_to_cart: "AGREGAR AL CARRITO",
    store_placeholder: "Escribe un comando para cambiar el precio...",
    store_processing: "Procesando comando...",
    store_price_updated: "Precio actualizado a",
    store_quick_discount: "Descuento 20%",
    store_quick_price: "Bajar precio a $1500",
    store_quick_increase: "Subir precio 10%",

    apps_title: "Aplicaciones Móviles",
    apps_subtitle: "Descarga y experimenta IA en tu dispositivo",
    apps_description: "Obtén la mejor experiencia de usuario con nuestras aplicaciones móviles",
    apps_key_features: "Características Principales",
    apps_download_here: "Descargar App Aquí",
    apps_coming_soon: "Próximamente",
    apps_available: "Disponible",
    apps_need_custom: "¿Necesitas una App Móvil Personalizada?",
    apps_custom_description: "Desarrollo aplicaciones móviles de vanguardia con integración de IA. Demos vida a tu idea de aplicación móvil con la última tecnología.",
    apps_discuss_project: "Discutir tu Proyecto",

    contact_title: "Trabajemos Juntos",
    contact_description: "¿Listo para dar vida a tus ideas de IA? Hablemos sobre tu próximo proyecto.",
    contact_email: "Enviar un Email",
    contact_whatsapp: "Chatear en WhatsApp",
    contact_connect_with: "Conéctate conmigo:",
    contact_additional_info: "¡No dudes en contactarme para colaboraciones, consultas o simplemente una charla amistosa sobre IA y tecnología!",

    form_title: "Envíame un mensaje",
    form_name: "Nombre",
    form_email: "Email",
    form_phone: "Teléfono (opcional)",
    form_message: "Mensaje",
    form_send: "Enviar",
    form_sending: "Enviando...",
    form_success: "¡Mensaje enviado con éxito! Te responderé pronto.",
    form_failure: "No se pudo enviar el mensaje. Por favor intenta de nuevo.",
    form_name_required: "El nombre es obligatorio",
    form_email_invalid: "Se requiere un email válido",
    form_message_required: "El mensaje es obligatorio",

    chat_title: "Asistente IA",
    chat_subtitle: "Impulsado por automatización n8n",
    chat_greeting: "👋 ¡Hola! Soy el asistente AI de Mario. Estoy aquí para ayudarte con cualquier pregunta sobre su portfolio, servicios o proyectos de desarrollo AI.",
    chat_offline: "El chat está temporalmente fuera de línea. Puedes contactarme directamente por WhatsApp o email.",
    chat_error: "Lo siento, hay un problema de conexión. Por favor intenta de nuevo.",
    chat_placeholder: "Escribe tu mensaje...",

    footer_rights: "Todos los derechos reservados",
    footer_built_with: "Construido con Rust, Leptos e IA",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_round_trips() {
        assert_eq!(Language::En.toggled(), Language::Es);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Es.code(), "es");
    }
}
