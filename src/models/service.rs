use serde::{Deserialize, Serialize};

/// Closed set of services the company offers, plus an explicit fallback for
/// anything the catalogue doesn't cover. The serde names double as the
/// stable service identifiers used by the booking form and the webhook
/// payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    #[serde(rename = "tømrer")]
    Carpentry,
    #[serde(rename = "murer")]
    Masonry,
    #[serde(rename = "rengøring")]
    Cleaning,
    #[serde(rename = "snerydning")]
    SnowRemoval,
    #[serde(rename = "havearbejde")]
    Gardening,
    #[serde(rename = "brolægning")]
    Paving,
    #[serde(rename = "terrasserens")]
    TerraceCleaning,
    #[serde(rename = "facility")]
    FacilityManagement,
    #[serde(rename = "vedligehold")]
    Maintenance,
    #[serde(rename = "andet")]
    Other,
}

/// Catalogue entry as exposed to the booking widget's select box.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

const CATALOGUE: [ServiceKind; 10] = [
    ServiceKind::Carpentry,
    ServiceKind::Masonry,
    ServiceKind::Cleaning,
    ServiceKind::SnowRemoval,
    ServiceKind::Gardening,
    ServiceKind::Paving,
    ServiceKind::TerraceCleaning,
    ServiceKind::FacilityManagement,
    ServiceKind::Maintenance,
    ServiceKind::Other,
];

impl ServiceKind {
    pub fn id(&self) -> &'static str {
        match self {
            ServiceKind::Carpentry => "tømrer",
            ServiceKind::Masonry => "murer",
            ServiceKind::Cleaning => "rengøring",
            ServiceKind::SnowRemoval => "snerydning",
            ServiceKind::Gardening => "havearbejde",
            ServiceKind::Paving => "brolægning",
            ServiceKind::TerraceCleaning => "terrasserens",
            ServiceKind::FacilityManagement => "facility",
            ServiceKind::Maintenance => "vedligehold",
            ServiceKind::Other => "andet",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ServiceKind::Carpentry => "Tømrerarbejde",
            ServiceKind::Masonry => "Murerarbejde",
            ServiceKind::Cleaning => "Rengøring",
            ServiceKind::SnowRemoval => "Snerydning",
            ServiceKind::Gardening => "Havearbejde",
            ServiceKind::Paving => "Brolægning",
            ServiceKind::TerraceCleaning => "Terrasserens",
            ServiceKind::FacilityManagement => "Facility Mgt.",
            ServiceKind::Maintenance => "Vedligeholdelse",
            ServiceKind::Other => "Andet",
        }
    }

    fn price(&self) -> &'static str {
        match self {
            ServiceKind::Cleaning | ServiceKind::Gardening | ServiceKind::Maintenance => {
                "350,- ekskl. moms/time"
            }
            _ => "400,- ekskl. moms/time",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ServiceKind::Carpentry => {
                "Professionel udførelse af alt fra små reparationer til større byggeprojekter."
            }
            ServiceKind::Masonry => {
                "Kvalitetsbevidst murerarbejde, renovering af facader og flisearbejde."
            }
            ServiceKind::Cleaning => {
                "Grundig rengøring af kontorer, trappeopgange og private hjem."
            }
            ServiceKind::SnowRemoval => {
                "Pålidelig snerydning og saltning, så du kan færdes sikkert."
            }
            ServiceKind::Gardening => {
                "Græsslåning, hækklipning og generel pasning af grønne arealer."
            }
            ServiceKind::Paving => {
                "Etablering af indkørsler, terrasser og stier i høj kvalitet."
            }
            ServiceKind::TerraceCleaning => {
                "Effektiv fjernelse af alger og snavs fra træ- og fliseterrasser."
            }
            ServiceKind::FacilityManagement => {
                "Totaldrift af ejendomme. Vi holder overblikket for dig."
            }
            ServiceKind::Maintenance => {
                "Løbende vedligehold der forebygger skader og bevarer værdien."
            }
            ServiceKind::Other => "Andre opgaver efter aftale.",
        }
    }

    pub fn info(&self) -> ServiceInfo {
        ServiceInfo {
            id: self.id(),
            title: self.title(),
            price: self.price(),
            description: self.description(),
        }
    }

    /// Resolves free-text input (a form value or an AI service guess) to a
    /// known service. Case-insensitive substring matching against title or
    /// id; anything unmatched falls back to `Other` rather than being
    /// rejected.
    pub fn resolve(input: &str) -> ServiceKind {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return ServiceKind::Other;
        }
        CATALOGUE
            .iter()
            .copied()
            .find(|s| {
                needle.contains(&s.title().to_lowercase()) || needle.contains(s.id())
            })
            .unwrap_or(ServiceKind::Other)
    }
}

/// The full catalogue in display order, `Other` last.
pub fn catalogue() -> Vec<ServiceInfo> {
    CATALOGUE.iter().map(|s| s.info()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_id() {
        assert_eq!(ServiceKind::resolve("snerydning"), ServiceKind::SnowRemoval);
        assert_eq!(ServiceKind::resolve("tømrer"), ServiceKind::Carpentry);
    }

    #[test]
    fn test_resolve_title_any_case() {
        assert_eq!(ServiceKind::resolve("RENGØRING"), ServiceKind::Cleaning);
        assert_eq!(ServiceKind::resolve("Havearbejde"), ServiceKind::Gardening);
    }

    #[test]
    fn test_resolve_substring() {
        assert_eq!(
            ServiceKind::resolve("jeg vil gerne bestille snerydning i morgen"),
            ServiceKind::SnowRemoval
        );
        assert_eq!(
            ServiceKind::resolve("noget tømrerarbejde på taget"),
            ServiceKind::Carpentry
        );
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_other() {
        assert_eq!(ServiceKind::resolve("vinduespudsning"), ServiceKind::Other);
        assert_eq!(ServiceKind::resolve(""), ServiceKind::Other);
        assert_eq!(ServiceKind::resolve("   "), ServiceKind::Other);
    }

    #[test]
    fn test_resolve_title_variant_of_id() {
        // "Vedligeholdelse" contains the id "vedligehold"
        assert_eq!(
            ServiceKind::resolve("vedligeholdelse"),
            ServiceKind::Maintenance
        );
    }

    #[test]
    fn test_catalogue_order_and_size() {
        let services = catalogue();
        assert_eq!(services.len(), 10);
        assert_eq!(services[0].id, "tømrer");
        assert_eq!(services.last().map(|s| s.id), Some("andet"));
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&ServiceKind::SnowRemoval).unwrap();
        assert_eq!(json, "\"snerydning\"");
        let parsed: ServiceKind = serde_json::from_str("\"andet\"").unwrap();
        assert_eq!(parsed, ServiceKind::Other);
    }
}
