use crate::config::ExternalApp;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Es,
    En,
}

impl Default for Language {
    fn default() -> Self {
        crate::config::DEFAULT_LANGUAGE
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
        }
    }

    pub fn thousands_separator(self) -> char {
        match self {
            Language::Es => '.',
            Language::En => ',',
        }
    }

    pub fn content(self) -> &'static Content {
        match self {
            Language::Es => &ES,
            Language::En => &EN,
        }
    }
}

pub struct Content {
    pub menu: Menu,
    pub request_demo: &'static str,
    pub open_menu: &'static str,
    pub close_menu: &'static str,
    pub meta_description: &'static str,
    pub hero: Hero,
    pub stats: Stats,
    pub launcher: Launcher,
    pub services: Services,
    pub systems: Systems,
    pub pricing: Pricing,
    pub faq: Faq,
    pub contact: Contact,
    pub footer: Footer,
    pub legal: Legal,
}

pub struct Menu {
    pub home: &'static str,
    pub services: &'static str,
    pub systems: &'static str,
    pub pricing: &'static str,
    pub faq: &'static str,
    pub contact: &'static str,
}

impl Menu {
    /// (anchor id, label) pairs in navigation order.
    pub fn items(&self) -> [(&'static str, &'static str); 6] {
        [
            ("home", self.home),
            ("services", self.services),
            ("systems", self.systems),
            ("pricing", self.pricing),
            ("faq", self.faq),
            ("contact", self.contact),
        ]
    }
}

pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub explore: &'static str,
    pub demo: &'static str,
}

pub struct Stats {
    pub records: &'static str,
    pub uptime: &'static str,
    pub countries: &'static str,
}

pub struct Launcher {
    pub tip: &'static str,
    pub placeholder: &'static str,
    pub no_results: &'static str,
}

pub struct Role {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Services {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub roles: &'static [Role],
}

pub struct ModuleCopy {
    pub description: &'static str,
    pub short: &'static str,
    pub bullets: &'static [&'static str],
}

pub struct Systems {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub open_app: &'static str,
    pub flagship: &'static str,
    pub snaplog: ModuleCopy,
    pub fueltrack: ModuleCopy,
    pub field360: ModuleCopy,
}

impl Systems {
    pub fn module(&self, app: ExternalApp) -> &ModuleCopy {
        match app {
            ExternalApp::SnapLog => &self.snaplog,
            ExternalApp::FuelTrack => &self.fueltrack,
            ExternalApp::Field360 => &self.field360,
        }
    }
}

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub items: &'static [&'static str],
}

pub struct Pricing {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub plans: &'static [Plan],
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Faq {
    pub title: &'static str,
    pub items: &'static [FaqEntry],
}

pub struct Contact {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub module: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
    pub options: &'static [&'static str],
    pub direct: &'static str,
    pub thanks: &'static str,
    pub missing_name: &'static str,
    pub missing_email: &'static str,
    pub invalid_email: &'static str,
}

pub struct Footer {
    pub tagline: &'static str,
    pub cities: &'static str,
    pub links: &'static str,
    pub contact: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
    pub rights: &'static str,
}

pub struct Legal {
    pub privacy_title: &'static str,
    pub privacy_body: &'static [&'static str],
    pub terms_title: &'static str,
    pub terms_body: &'static [&'static str],
    pub back: &'static str,
}

pub static EN: Content = Content {
    menu: Menu {
        home: "Home",
        services: "Services",
        systems: "Systems",
        pricing: "Pricing",
        faq: "FAQ",
        contact: "Contact",
    },
    request_demo: "Request demo",
    open_menu: "Open menu",
    close_menu: "Close menu",
    meta_description: "One platform. Three modules. Real-time operations for drivers, deliveries and field management.",
    hero: Hero {
        title: "Run field ops like a high-performance team.",
        subtitle: "One platform. Three focused modules. Real-time data for drivers, deliveries, and operations.",
        explore: "Explore Modules",
        demo: "Request Demo",
    },
    stats: Stats {
        records: "Records captured",
        uptime: "Platform uptime",
        countries: "Countries operating",
    },
    launcher: Launcher {
        tip: "Tip: open quick switcher with",
        placeholder: "Search… (apps, modules)",
        no_results: "No results",
    },
    services: Services {
        title: "The Suite",
        subtitle: "A unified platform with role-based modules designed to reduce errors, automate workflows, and scale.",
        roles: &[
            Role {
                title: "Drivers",
                body: "RB FuelTrack 360 — OCR receipts, receiptless audit (odometer + pump + GPS) and route overview.",
            },
            Role {
                title: "Deliveries",
                body: "RB SnapLog 360 — enterprise-grade proof of delivery with photo, GPS and reverse geocoding.",
            },
            Role {
                title: "Operations / Warehouse / Finance",
                body: "RB Field360 — records, analytics & payroll; fleet and warehouse control.",
            },
        ],
    },
    systems: Systems {
        title: "Modules",
        subtitle: "Mix and match what your team needs. Everything stays consistent under RB Field Pro 360.",
        open_app: "Open app",
        flagship: "Flagship",
        snaplog: ModuleCopy {
            description: "Enterprise-grade Proof of Delivery optimized for mobile. Guided capture with photo, GPS and timestamp, automatic address from coordinates (reverse geocoding), ultra-low user interaction and automatic background sync. Offline-first, built to work without coverage.",
            short: "One-tap POD with photo+GPS",
            bullets: &[
                "One-tap proof: photo + GPS + timestamp.",
                "Automatic address from coordinates (reverse geocoding).",
                "Offline-first with background sync; records are never lost.",
                "Minimal input: operator’s name only.",
                "Bilingual interface (EN/ES).",
            ],
        },
        fueltrack: ModuleCopy {
            description: "Fuel and route control with automated audit. Receipt OCR, receiptless flow with odometer/pump/GPS validation, cost-per-unit tracking, and exception alerts. Built for driver simplicity.",
            short: "Fuel audit & route control",
            bullets: &[
                "Receipt OCR and receiptless validation (odometer / pump / GPS).",
                "Cost-per-unit tracking and route overview.",
                "Exception alerts and audit trail.",
                "Driver-first UX for fast capture on the go.",
            ],
        },
        field360: ModuleCopy {
            description: "Flagship operations hub: orchestrates real-time workflows; daily records, productivity and payroll; kits/uniforms inventory; fleet & maintenance; role-based permissions, executive dashboards and advanced analytics.",
            short: "Operations hub (flagship)",
            bullets: &[
                "Daily records, productivity metrics and payroll.",
                "Kits/uniforms inventory and consumables control.",
                "Fleet management and preventive maintenance.",
                "Role-based permissions and auditable actions.",
                "Executive dashboards and advanced analytics.",
            ],
        },
    },
    pricing: Pricing {
        title: "Pricing",
        subtitle: "Start small, scale up anytime.",
        cta: "Request quote",
        plans: &[
            Plan {
                name: "Starter",
                price: "Contact",
                items: &["SnapLog 360 or FuelTrack 360", "Up to 10 users", "Email support"],
            },
            Plan {
                name: "Fleet",
                price: "Contact",
                items: &["FuelTrack 360 + Field360 (light)", "Up to 25 users", "OCR & audit features"],
            },
            Plan {
                name: "Full Suite",
                price: "Contact",
                items: &["Field360 + SnapLog 360 + FuelTrack 360", "Advanced exports & roles", "Priority support"],
            },
        ],
    },
    faq: Faq {
        title: "FAQ",
        items: &[
            FaqEntry {
                question: "Can I start with one module and add more later?",
                answer: "Yes, all modules share branding and data model.",
            },
            FaqEntry {
                question: "Do drivers need separate logins?",
                answer: "Keep light apps per role now; move to SSO later if you want.",
            },
            FaqEntry {
                question: "Where is data stored?",
                answer: "On a dedicated database exclusively for your company, with role-based security.",
            },
            FaqEntry {
                question: "Custom features?",
                answer: "Yes. We tailor workflows, reports and permissions.",
            },
        ],
    },
    contact: Contact {
        title: "Ready to transform your operation?",
        subtitle: "Schedule a personalized demo and discover how RB Field Pro 360 can optimize your business.",
        name: "Full name",
        email: "Email address",
        module: "Select a module of interest",
        message: "Tell us about your needs...",
        submit: "Request Demo",
        options: &["RB SnapLog 360", "RB FuelTrack 360", "RB Field360", "Full Suite"],
        direct: "Prefer to talk directly?",
        thanks: "Thanks! We’ll get back to you shortly.",
        missing_name: "Please tell us your name.",
        missing_email: "Please enter your email address.",
        invalid_email: "That email address doesn’t look right.",
    },
    footer: Footer {
        tagline: "Technology solutions to transform your company's operational efficiency.",
        cities: "Norridge / Chicago, Illinois, USA",
        links: "Links",
        contact: "Contact",
        privacy: "Privacy Policy",
        terms: "Terms of Service",
        rights: "All rights reserved.",
    },
    legal: Legal {
        privacy_title: "Privacy Policy",
        privacy_body: &[
            "This website does not collect personal data. The contact form is processed only in your browser and nothing is transmitted to our servers.",
            "We store a single preference in your browser, your chosen language, so the site opens in that language next time. You can remove it by clearing your browser's site data.",
            "The RB SnapLog 360, RB FuelTrack 360 and RB Field360 applications are separate services with their own privacy terms.",
        ],
        terms_title: "Terms of Service",
        terms_body: &[
            "The content of this website is provided for information purposes about the RB Field Pro 360 suite.",
            "Plan contents and availability are confirmed in a written quote. Nothing on this page is a binding offer.",
            "Use of each application is governed by the agreement signed with RB Group Solutions LLC.",
        ],
        back: "Back to home",
    },
};

pub static ES: Content = Content {
    menu: Menu {
        home: "Inicio",
        services: "Servicios",
        systems: "Sistemas",
        pricing: "Precios",
        faq: "FAQ",
        contact: "Contacto",
    },
    request_demo: "Solicitar demo",
    open_menu: "Abrir menú",
    close_menu: "Cerrar menú",
    meta_description: "Una plataforma. Tres módulos. Operaciones en tiempo real para drivers, entregas y gestión de campo.",
    hero: Hero {
        title: "Opera como una empresa de alto rendimiento.",
        subtitle: "Una plataforma. Tres módulos. Datos en tiempo real para drivers, entregas y operaciones.",
        explore: "Explorar Módulos",
        demo: "Solicitar Demo",
    },
    stats: Stats {
        records: "Registros capturados",
        uptime: "Disponibilidad plataforma",
        countries: "Países operando",
    },
    launcher: Launcher {
        tip: "Consejo: abre el conmutador rápido con",
        placeholder: "Buscar… (apps, módulos)",
        no_results: "Sin resultados",
    },
    services: Services {
        title: "La Suite",
        subtitle: "Plataforma unificada con módulos por rol para reducir errores, automatizar flujos y escalar.",
        roles: &[
            Role {
                title: "Drivers",
                body: "RB FuelTrack 360 — OCR de recibos, auditoría sin recibo (odómetro + bomba + GPS) y vista de ruta.",
            },
            Role {
                title: "Deliveries",
                body: "RB SnapLog 360 — POD de nivel empresarial con foto, GPS y geocodificación inversa.",
            },
            Role {
                title: "Operaciones / Almacén / Finanzas",
                body: "RB Field360 — registros, analítica y nómina; control de flota y almacén.",
            },
        ],
    },
    systems: Systems {
        title: "Módulos",
        subtitle: "Combina lo que necesitas. Todo consistente bajo RB Field Pro 360.",
        open_app: "Abrir app",
        flagship: "Joya de la corona",
        snaplog: ModuleCopy {
            description: "Prueba de Entrega (POD) de nivel empresarial, optimizada para móviles. Captura guiada con foto, GPS y sello de tiempo; dirección automática desde coordenadas (geocodificación inversa), interacción mínima y sincronización automática. Enfoque offline-first para operar sin cobertura.",
            short: "POD en un toque con foto+GPS",
            bullets: &[
                "POD en un toque: foto + GPS + sello de tiempo.",
                "Dirección automática desde coordenadas (geocodificación inversa).",
                "Offline-first con sincronización en segundo plano; los registros no se pierden.",
                "Interacción mínima: solo nombre del operario.",
                "Interfaz bilingüe (ES/EN).",
            ],
        },
        fueltrack: ModuleCopy {
            description: "Control de combustible y ruta con auditoría automática. OCR de recibos, flujo sin recibo con validación de odómetro/bomba/GPS, cálculo de costo por unidad y alertas de excepción. Diseñado para la simplicidad del conductor.",
            short: "Auditoría de combustible y rutas",
            bullets: &[
                "OCR de recibos y validación sin recibo (odómetro / bomba / GPS).",
                "Cálculo de costo por unidad y vista de ruta.",
                "Alertas de excepción y traza de auditoría.",
                "UX pensada para el conductor: captura rápida en movimiento.",
            ],
        },
        field360: ModuleCopy {
            description: "La joya de la corona: el hub operativo que orquesta flujos en tiempo real; registros diarios, productividad y nómina; inventario de kits/uniformes; gestión de flota y mantenimiento; permisos por rol, tableros ejecutivos y analítica avanzada.",
            short: "Hub operativo (joya de la corona)",
            bullets: &[
                "Registros diarios, métricas de productividad y nómina.",
                "Inventario de kits/uniformes y control de consumibles.",
                "Gestión de flota y mantenimiento preventivo.",
                "Permisos por rol y acciones auditables.",
                "Tableros ejecutivos y analítica avanzada.",
            ],
        },
    },
    pricing: Pricing {
        title: "Precios",
        subtitle: "Empieza pequeño y escala cuando quieras.",
        cta: "Solicitar cotización",
        plans: &[
            Plan {
                name: "Starter",
                price: "Contacto",
                items: &["SnapLog 360 o FuelTrack 360", "Hasta 10 usuarios", "Soporte por email"],
            },
            Plan {
                name: "Fleet",
                price: "Contacto",
                items: &["FuelTrack 360 + Field360 (ligero)", "Hasta 25 usuarios", "OCR y auditoría"],
            },
            Plan {
                name: "Full Suite",
                price: "Contacto",
                items: &["Field360 + SnapLog 360 + FuelTrack 360", "Exportaciones avanzadas y roles", "Soporte prioritario"],
            },
        ],
    },
    faq: Faq {
        title: "Preguntas frecuentes",
        items: &[
            FaqEntry {
                question: "¿Puedo empezar con un módulo y agregar más?",
                answer: "Sí. Comparten branding y modelo de datos.",
            },
            FaqEntry {
                question: "¿Necesitan varios logins los drivers?",
                answer: "Puedes mantener apps por rol ahora y pasar a SSO luego.",
            },
            FaqEntry {
                question: "¿Dónde se guardan los datos?",
                answer: "En una base de datos dedicada para tu empresa, con seguridad por roles.",
            },
            FaqEntry {
                question: "¿Hacen personalizaciones?",
                answer: "Sí. Ajustamos flujos, reportes y permisos a tu operación.",
            },
        ],
    },
    contact: Contact {
        title: "¿Listo para transformar tu operación?",
        subtitle: "Agenda una demo personalizada y descubre cómo RB Field Pro 360 puede optimizar tu negocio.",
        name: "Nombre completo",
        email: "Correo electrónico",
        module: "Selecciona un módulo de interés",
        message: "Cuéntanos tus necesidades...",
        submit: "Solicitar Demo",
        options: &["RB SnapLog 360", "RB FuelTrack 360", "RB Field360", "Full Suite"],
        direct: "¿Prefieres hablar directamente?",
        thanks: "¡Gracias! Te contactaremos muy pronto.",
        missing_name: "Por favor indícanos tu nombre.",
        missing_email: "Por favor escribe tu correo electrónico.",
        invalid_email: "Ese correo electrónico no parece válido.",
    },
    footer: Footer {
        tagline: "Soluciones tecnológicas para transformar la eficiencia operativa de tu empresa.",
        cities: "Norridge / Chicago, Illinois, USA",
        links: "Enlaces",
        contact: "Contacto",
        privacy: "Política de Privacidad",
        terms: "Términos del Servicio",
        rights: "Todos los derechos reservados.",
    },
    legal: Legal {
        privacy_title: "Política de Privacidad",
        privacy_body: &[
            "Este sitio no recopila datos personales. El formulario de contacto se procesa solo en tu navegador y no se envía nada a nuestros servidores.",
            "Guardamos una única preferencia en tu navegador, el idioma elegido, para abrir el sitio en ese idioma la próxima vez. Puedes eliminarla borrando los datos del sitio en tu navegador.",
            "Las aplicaciones RB SnapLog 360, RB FuelTrack 360 y RB Field360 son servicios independientes con sus propios términos de privacidad.",
        ],
        terms_title: "Términos del Servicio",
        terms_body: &[
            "El contenido de este sitio se ofrece con fines informativos sobre la suite RB Field Pro 360.",
            "El contenido y la disponibilidad de cada plan se confirman en una cotización por escrito. Nada en esta página constituye una oferta vinculante.",
            "El uso de cada aplicación se rige por el acuerdo firmado con RB Group Solutions LLC.",
        ],
        back: "Volver al inicio",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code(" EN "), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default(), Language::Es);
    }

    #[test]
    fn tables_have_matching_shapes() {
        let (en, es) = (Language::En.content(), Language::Es.content());
        assert_eq!(en.services.roles.len(), es.services.roles.len());
        assert_eq!(en.pricing.plans.len(), es.pricing.plans.len());
        assert_eq!(en.faq.items.len(), es.faq.items.len());
        assert_eq!(en.contact.options, es.contact.options);
        assert_eq!(en.legal.privacy_body.len(), es.legal.privacy_body.len());
        assert_eq!(en.legal.terms_body.len(), es.legal.terms_body.len());
        for (a, b) in en.pricing.plans.iter().zip(es.pricing.plans) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.items.len(), b.items.len());
        }
        for app in ExternalApp::ALL {
            assert_eq!(
                en.systems.module(app).bullets.len(),
                es.systems.module(app).bullets.len(),
                "{:?}",
                app
            );
        }
    }

    #[test]
    fn menu_items_follow_page_order() {
        let ids: Vec<_> = EN.menu.items().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["home", "services", "systems", "pricing", "faq", "contact"]);
        assert_eq!(ES.menu.items()[0].1, "Inicio");
    }
}
