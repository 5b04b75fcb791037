//! Static interface strings for the two supported display languages.
//!
//! Bundles are compiled in and handed out as `&'static` references, so every
//! lookup for the same language returns the same table.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Display language of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Es,
}

impl Language {
    /// Parse a language code. Anything other than `en`/`es` is rejected.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Parse a language code, falling back to Spanish.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        Self::parse(code).unwrap_or_default()
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

/// A full translation bundle.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub nav: Nav,
    pub home: Home,
    pub projects: Projects,
    pub project_details: ProjectDetails,
    pub contact: Contact,
    pub footer: Footer,
    pub generator: Generator,
    pub admin: Admin,
    pub login: Login,
    pub errors: Errors,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Nav {
    pub studio: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
    pub admin: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Home {
    pub hero: Hero,
    pub about: About,
    pub projects: HomeProjects,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub line1: &'static str,
    pub line2: &'static str,
    pub line3: &'static str,
    pub btn: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub subtitle: &'static str,
    pub description: &'static str,
    pub stats: Stats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub years: &'static str,
    pub projects: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeProjects {
    pub title: &'static str,
    pub view_all: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projects {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub all: &'static str,
    pub residential: &'static str,
    pub commercial: &'static str,
    pub cultural: &'static str,
    pub view_project: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub back: &'static str,
    pub client: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub area: &'static str,
    pub status: &'static str,
    pub about: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub offices: &'static str,
    pub form: ContactForm,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub send: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub social: &'static str,
    pub contact: &'static str,
    pub rights: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generator {
    pub title: &'static str,
    pub edit_title: &'static str,
    pub edit_mode: &'static str,
    pub description: &'static str,
    pub edit_description: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
    pub slug_hint: &'static str,
    pub slug_edit_hint: &'static str,
    pub logo: &'static str,
    pub logo_scale: &'static str,
    pub preview: &'static str,
    pub invert_logo: &'static str,
    pub email: &'static str,
    pub language: &'static str,
    pub btn_generate: &'static str,
    pub btn_update: &'static str,
    pub success_generate: &'static str,
    pub success_update: &'static str,
    pub logo_upload: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub new_link: &'static str,
    pub sign_out: &'static str,
    pub empty: &'static str,
    pub create_first: &'static str,
    pub col_name: &'static str,
    pub col_slug: &'static str,
    pub col_language: &'static str,
    pub col_created: &'static str,
    pub col_actions: &'static str,
    pub delete_confirm: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Login {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub submit: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Errors {
    pub unauthorized_title: &'static str,
    pub unauthorized_body: &'static str,
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub back_home: &'static str,
}

/// English bundle.
pub static EN: Translations = Translations {
    nav: Nav {
        studio: "Studio",
        projects: "Projects",
        contact: "Contact",
        admin: "Admin",
    },
    home: Home {
        hero: Hero {
            line1: "Designing",
            line2: "The Future",
            line3: "Of Space",
            btn: "View Projects",
        },
        about: About {
            subtitle: "The Studio",
            description: "is a contemporary architecture studio focused on creating spaces that dialogue with their surroundings. We seek geometric purity, material honesty, and light as fundamental elements of our design.",
            stats: Stats {
                years: "Years of experience",
                projects: "Completed projects",
            },
        },
        projects: HomeProjects {
            title: "Selected\nWorks",
            view_all: "View all",
        },
    },
    projects: Projects {
        title: "Our Projects",
        subtitle: "A selection of our latest architectural works, ranging from residential to commercial spaces.",
        all: "All",
        residential: "Residential",
        commercial: "Commercial",
        cultural: "Cultural",
        view_project: "View Project",
    },
    project_details: ProjectDetails {
        back: "Back to projects",
        client: "Client",
        location: "Location",
        year: "Year",
        area: "Area",
        status: "Status",
        about: "About the project",
    },
    contact: Contact {
        title: "Get in Touch",
        subtitle: "Do you have a project in mind? We'd love to hear from you.",
        offices: "Our Offices",
        form: ContactForm {
            name: "Name",
            email: "Email",
            message: "Message",
            send: "Send Message",
        },
    },
    footer: Footer {
        social: "Social",
        contact: "Contact Us",
        rights: "All rights reserved.",
    },
    generator: Generator {
        title: "Link Generator",
        edit_title: "Edit Link",
        edit_mode: "Edit Mode",
        description: "Create a custom shareable link to present the portfolio with a client's branding.",
        edit_description: "Update the details for this generated portfolio link.",
        name: "Client Name",
        slug: "Custom URL Slug",
        slug_hint: "This will create a link like: yourwebsite.com/",
        slug_edit_hint: "The slug cannot be changed to prevent breaking existing links.",
        logo: "Company Logo URL",
        logo_scale: "Logo Display Scale",
        preview: "Preview",
        invert_logo: "Invert Logo Color (for dark backgrounds)",
        email: "Client Email (Optional)",
        language: "Display Language",
        btn_generate: "Generate Short Link",
        btn_update: "Update Link Content",
        success_generate: "Generated Link",
        success_update: "Update Successful",
        logo_upload: "Upload File",
    },
    admin: Admin {
        title: "Dashboard",
        subtitle: "Manage your generated portfolio links.",
        new_link: "New Link",
        sign_out: "Sign Out",
        empty: "No client links generated yet.",
        create_first: "Create your first link",
        col_name: "Client Name",
        col_slug: "Slug",
        col_language: "Language",
        col_created: "Created",
        col_actions: "Actions",
        delete_confirm: "Are you sure you want to delete the link for",
    },
    login: Login {
        title: "Admin Login",
        subtitle: "Sign in to manage client links.",
        email: "Email",
        password: "Password",
        submit: "Sign In",
    },
    errors: Errors {
        unauthorized_title: "Access Denied",
        unauthorized_body: "This portfolio link is invalid or requires permission.",
        not_found_title: "Page Not Found",
        not_found_body: "The page you are looking for does not exist.",
        back_home: "Back to home",
    },
};

/// Spanish bundle, also the fallback for unknown language codes.
pub static ES: Translations = Translations {
    nav: Nav {
        studio: "Estudio",
        projects: "Proyectos",
        contact: "Contacto",
        admin: "Panel",
    },
    home: Home {
        hero: Hero {
            line1: "Diseñando",
            line2: "El Futuro",
            line3: "Del Espacio",
            btn: "Ver Proyectos",
        },
        about: About {
            subtitle: "El Estudio",
            description: "es un estudio de arquitectura contemporánea enfocado en crear espacios que dialogan con su entorno. Buscamos la pureza geométrica, la honestidad de los materiales y la luz como elementos fundamentales de nuestro diseño.",
            stats: Stats {
                years: "Años de experiencia",
                projects: "Proyectos completados",
            },
        },
        projects: HomeProjects {
            title: "Obras\nSelectas",
            view_all: "Ver todos",
        },
    },
    projects: Projects {
        title: "Nuestros Proyectos",
        subtitle: "Una selección de nuestras obras arquitectónicas más recientes, desde espacios residenciales hasta comerciales.",
        all: "Todos",
        residential: "Residencial",
        commercial: "Comercial",
        cultural: "Cultural",
        view_project: "Ver Proyecto",
    },
    project_details: ProjectDetails {
        back: "Volver a proyectos",
        client: "Cliente",
        location: "Ubicación",
        year: "Año",
        area: "Área",
        status: "Estado",
        about: "Sobre el proyecto",
    },
    contact: Contact {
        title: "Ponte en Contacto",
        subtitle: "¿Tienes un proyecto en mente? Nos encantaría escucharte.",
        offices: "Nuestras Oficinas",
        form: ContactForm {
            name: "Nombre",
            email: "Correo",
            message: "Mensaje",
            send: "Enviar Mensaje",
        },
    },
    footer: Footer {
        social: "Redes Sociales",
        contact: "Contáctanos",
        rights: "Todos los derechos reservados.",
    },
    generator: Generator {
        title: "Generador de Enlaces",
        edit_title: "Editar Enlace",
        edit_mode: "Modo Edición",
        description: "Crea un enlace personalizado para presentar el portafolio con la marca de tu cliente.",
        edit_description: "Actualiza los detalles de este enlace de portafolio generado.",
        name: "Nombre del Cliente",
        slug: "URL Personalizada (Slug)",
        slug_hint: "Esto creará un enlace como: tuweb.com/",
        slug_edit_hint: "La URL no se puede cambiar para evitar romper enlaces existentes.",
        logo: "URL del Logo de la Empresa",
        logo_scale: "Escala Visual del Logo",
        preview: "Vista Previa",
        invert_logo: "Invertir Color del Logo (para fondos oscuros)",
        email: "Correo del Cliente (Opcional)",
        language: "Idioma de Visualización",
        btn_generate: "Generar Enlace Corto",
        btn_update: "Actualizar Contenido del Enlace",
        success_generate: "Enlace Generado",
        success_update: "Actualización Exitosa",
        logo_upload: "Subir Archivo",
    },
    admin: Admin {
        title: "Panel de Control",
        subtitle: "Administra tus enlaces de portafolio generados.",
        new_link: "Nuevo Enlace",
        sign_out: "Cerrar Sesión",
        empty: "Aún no se han generado enlaces de clientes.",
        create_first: "Crea tu primer enlace",
        col_name: "Nombre del Cliente",
        col_slug: "Enlace",
        col_language: "Idioma",
        col_created: "Creado",
        col_actions: "Acciones",
        delete_confirm: "¿Estás seguro de que deseas eliminar el enlace para",
    },
    login: Login {
        title: "Acceso de Administrador",
        subtitle: "Inicia sesión para administrar los enlaces de clientes.",
        email: "Correo",
        password: "Contraseña",
        submit: "Iniciar Sesión",
    },
    errors: Errors {
        unauthorized_title: "Acceso Denegado",
        unauthorized_body: "Este enlace de portafolio no es válido o requiere permiso.",
        not_found_title: "Página No Encontrada",
        not_found_body: "La página que buscas no existe.",
        back_home: "Volver al inicio",
    },
};

/// Bundle for a language.
#[must_use]
pub fn lookup(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn language_defaults_to_spanish() {
        assert_eq!(Language::default(), Language::Es);
        assert_eq!(Language::from_code("fr"), Language::Es);
        assert_eq!(Language::from_code(""), Language::Es);
        assert_eq!(Language::from_code(" EN "), Language::En);
    }

    #[test]
    fn lookup_returns_the_same_bundle_every_time() {
        assert!(ptr::eq(lookup(Language::En), lookup(Language::En)));
        assert!(ptr::eq(lookup(Language::Es), lookup(Language::from_code("es"))));
    }

    #[test]
    fn unknown_code_falls_back_to_spanish_bundle() {
        let bundle = lookup(Language::from_code("de"));

        assert!(ptr::eq(bundle, &ES));
        assert_eq!(bundle.nav.projects, "Proyectos");
    }

    #[test]
    fn bundles_serialize_with_camel_case_sections() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(lookup(Language::En))?;

        assert_eq!(value["projectDetails"]["back"], "Back to projects");
        assert_eq!(value["home"]["projects"]["viewAll"], "View all");

        Ok(())
    }
}
