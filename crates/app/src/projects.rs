//! Static portfolio catalogue.

use serde::Serialize;

/// Portfolio project shown on the projects pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub details: ProjectFacts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFacts {
    pub area: &'static str,
    pub typology: &'static str,
    pub status: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "CASA LUZ",
        location: "MEXICO CITY, MEXICO",
        year: "2024",
        image: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        description: "A single-family home designed to maximize natural light entry. The design revolves around a central courtyard acting as a green lung and distributor of interior spaces, blurring the boundaries between inside and outside through large floor-to-ceiling windows.",
        details: ProjectFacts {
            area: "350 m²",
            typology: "Residential",
            status: "Completed",
        },
    },
    Project {
        id: 2,
        title: "CRYSTAL PAVILION",
        location: "MONTERREY, MEXICO",
        year: "2023",
        image: "https://images.unsplash.com/photo-1513694203232-719a280e022f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        description: "Ephemeral exhibition space conceived as a lightbox. The minimalist steel and glass structure allows the surroundings to be reflected on its facades during the day, while at night it transforms into an urban beacon illuminating the surrounding square.",
        details: ProjectFacts {
            area: "120 m²",
            typology: "Cultural",
            status: "Completed",
        },
    },
    Project {
        id: 3,
        title: "HORIZON TOWER",
        location: "GUADALAJARA, MEXICO",
        year: "2023",
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        description: "Mixed-use building redefining the city's skyline. Its dynamic facade responds to solar orientation, optimizing energy consumption and offering panoramic terraces on each level to connect users with views of the landscape.",
        details: ProjectFacts {
            area: "12,500 m²",
            typology: "Commercial / Office",
            status: "Under construction",
        },
    },
    Project {
        id: 4,
        title: "MUSEUM OF TIME",
        location: "PUEBLA, MEXICO",
        year: "2022",
        image: "https://images.unsplash.com/photo-1690132223258-afafe25cbc6b?ixlib=rb-4.1.0&auto=format&fit=crop&w=1600&q=80",
        description: "Intervention in a historic industrial building. The project preserves the original brick envelope and inserts contemporary exposed concrete volumes to house the new exhibition rooms, creating a tense and beautiful dialogue between past and present.",
        details: ProjectFacts {
            area: "4,200 m²",
            typology: "Cultural / Rehabilitation",
            status: "Completed",
        },
    },
];

/// Office shown on the contact page and footer.
pub const OFFICE_ADDRESS: &str = "06600 Mexico City, Mexico";

#[must_use]
pub fn all() -> &'static [Project] {
    &PROJECTS
}

/// Look a project up by its path segment. Non-numeric ids never match.
#[must_use]
pub fn find(id: &str) -> Option<&'static Project> {
    let id: u32 = id.parse().ok()?;

    PROJECTS.iter().find(|project| project.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_returns_project_by_numeric_id() {
        assert_eq!(find("3").map(|project| project.title), Some("HORIZON TOWER"));
    }

    #[test]
    fn find_rejects_unknown_and_non_numeric_ids() {
        assert!(find("99").is_none());
        assert!(find("casa-luz").is_none());
        assert!(find("-1").is_none());
    }

    #[test]
    fn catalogue_ids_are_unique() {
        let mut ids: Vec<u32> = all().iter().map(|project| project.id).collect();

        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), all().len());
    }
}
