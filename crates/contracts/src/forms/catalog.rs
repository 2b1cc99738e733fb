//! Entity catalog and questionnaire registry
//!
//! The set of organization kinds that can request onboarding is closed and
//! known at compile time. Each kind owns one questionnaire schema; the
//! registry is built once and every schema is checked for field-id
//! uniqueness before it is served.

use crate::forms::schema::{FieldSpec, FieldType, FormSchema, FormSection};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Closed set of organization kinds, in catalog (grid) order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Pme,
    Municipalities,
    Collection,
    Ministries,
    Ngos,
    EconomicZones,
    Events,
    Enterprises,
    Consortiums,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Pme,
        EntityKind::Municipalities,
        EntityKind::Collection,
        EntityKind::Ministries,
        EntityKind::Ngos,
        EntityKind::EconomicZones,
        EntityKind::Events,
        EntityKind::Enterprises,
        EntityKind::Consortiums,
    ];

    /// The identifier used in URLs and submission payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Pme => "pme",
            EntityKind::Municipalities => "municipalities",
            EntityKind::Collection => "collection",
            EntityKind::Ministries => "ministries",
            EntityKind::Ngos => "ngos",
            EntityKind::EconomicZones => "economic-zones",
            EntityKind::Events => "events",
            EntityKind::Enterprises => "enterprises",
            EntityKind::Consortiums => "consortiums",
        }
    }

    /// Resolve a raw path segment. Unknown tags are the caller's
    /// "entity not recognized" case, not a panic.
    pub fn from_str(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Icon name for the selection grid (see `shared::icons`).
    pub fn icon(self) -> &'static str {
        match self {
            EntityKind::Pme => "shopping-bag",
            EntityKind::Municipalities => "map-pin",
            EntityKind::Collection => "factory",
            EntityKind::Ministries => "landmark",
            EntityKind::Ngos => "globe",
            EntityKind::EconomicZones => "building",
            EntityKind::Events => "calendar",
            EntityKind::Enterprises => "briefcase",
            EntityKind::Consortiums => "users",
        }
    }

    /// Accent color token for the selection grid card.
    pub fn accent(self) -> &'static str {
        match self {
            EntityKind::Pme => "blue",
            EntityKind::Municipalities => "green",
            EntityKind::Collection => "orange",
            EntityKind::Ministries => "purple",
            EntityKind::Ngos => "pink",
            EntityKind::EconomicZones => "indigo",
            EntityKind::Events => "red",
            EntityKind::Enterprises => "teal",
            EntityKind::Consortiums => "fuchsia",
        }
    }
}

/// Questionnaire schema for the given entity kind.
pub fn schema_for(kind: EntityKind) -> &'static FormSchema {
    SCHEMAS
        .get(&kind)
        .expect("schema registered for every entity kind")
}

static SCHEMAS: Lazy<BTreeMap<EntityKind, FormSchema>> = Lazy::new(|| {
    let mut registry = BTreeMap::new();
    for schema in [
        pme(),
        municipalities(),
        collection(),
        ministries(),
        ngos(),
        economic_zones(),
        events(),
        enterprises(),
        consortiums(),
    ] {
        if let Err(e) = schema.check_unique_ids() {
            panic!("invalid questionnaire schema: {e}");
        }
        registry.insert(schema.entity, schema);
    }
    registry
});

fn text(id: &str, label: &str) -> FieldSpec {
    FieldSpec::new(id, label, FieldType::Text)
}

fn email(id: &str, label: &str) -> FieldSpec {
    FieldSpec::new(id, label, FieldType::Email)
}

fn tel(id: &str, label: &str) -> FieldSpec {
    FieldSpec::new(id, label, FieldType::Tel)
}

fn number(id: &str, label: &str) -> FieldSpec {
    FieldSpec::new(id, label, FieldType::Number)
}

fn textarea(id: &str, label: &str) -> FieldSpec {
    FieldSpec::new(id, label, FieldType::Textarea)
}

fn select(id: &str, label: &str, options: &[&str]) -> FieldSpec {
    FieldSpec::new(id, label, FieldType::Select).with_options(options.iter().copied())
}

fn yes_no(id: &str, label: &str) -> FieldSpec {
    select(id, label, &["Oui", "Non"])
}

fn pme() -> FormSchema {
    FormSchema::new(
        EntityKind::Pme,
        vec![
            FormSection::new(
                "IDENTITÉ",
                vec![
                    text("companyName", "Nom de l'entreprise"),
                    text("activityType", "Type d'activité"),
                    text("sector", "Secteur (restauration, santé, éducation…)"),
                    text("headquarters", "Adresse du siège / lieu principal"),
                    text("cityRegion", "Ville / Région"),
                    text("responsibleName", "Nom du responsable"),
                    text("responsiblePosition", "Fonction du responsable"),
                    tel("phone", "Téléphone"),
                    email("email", "Email"),
                ],
            ),
            FormSection::new(
                "DÉTAILS OPÉRATIONNELS",
                vec![
                    number("collectionPoints", "Nombre de points de collecte"),
                    number("wasteVolume", "Volume estimé déchets/semaine (kg)"),
                    textarea("wasteTypes", "Types de déchets principaux"),
                    text("collectionFrequency", "Fréquence de collecte souhaitée"),
                    text("availableHours", "Heures de disponibilité pour la collecte"),
                    number("employeeCount", "Nombre d'employés concernés"),
                ],
            ),
            FormSection::new(
                "BESOINS SPÉCIFIQUES",
                vec![
                    yes_no("selectiveSorting", "Tri sélectif souhaité ?"),
                    yes_no("composting", "Valorisation / compostage ?"),
                    yes_no("employeeTraining", "Besoin de formation employés ?"),
                    yes_no("ecoBadge", "Badge \"Entreprise Éco-responsable\" souhaité ?"),
                    textarea("otherNeeds", "Autre besoin spécifique (optionnel)").optional(),
                ],
            ),
        ],
    )
}

fn municipalities() -> FormSchema {
    FormSchema::new(
        EntityKind::Municipalities,
        vec![
            FormSection::new(
                "INFORMATIONS ADMINISTRATIVES",
                vec![
                    text("municipalityName", "Nom de la commune / collectivité"),
                    text("type", "Type (commune, ville, région, département)"),
                    text("regionDept", "Région / Département concerné"),
                    number("population", "Population estimée"),
                    number("area", "Superficie (km²)"),
                    text("mayorPrefect", "Nom du maire / préfet"),
                    text("technicalHead", "Nom du responsable technique"),
                    text("position", "Fonction"),
                    tel("phone", "Téléphone"),
                    email("email", "Email officiel"),
                ],
            ),
            FormSection::new(
                "SITUATION ACTUELLE",
                vec![
                    number("collectionAgents", "Nombre d'agents de collecte actuels"),
                    number("vehicles", "Nombre de véhicules de collecte"),
                    text("currentFrequency", "Fréquence de collecte actuelle"),
                    textarea("unservedZones", "Zones non desservies ?"),
                    yes_no("trackingSystem", "Système de suivi actuel (Oui/Non)"),
                    textarea("currentPartners", "Partenaires de collecte actuels"),
                    number("monthlyVolume", "Volume déchets collectés/mois (tonnes)"),
                ],
            ),
            FormSection::new(
                "BESOINS ET OBJECTIFS",
                vec![
                    textarea("mainObjective", "Objectif principal (propreté, efficacité…)"),
                    number("neighborhoodCount", "Nombre de quartiers à couvrir"),
                    yes_no("publicInterface", "Interface publique transparente souhaitée ?"),
                    yes_no("routeOptimization", "Optimisation des routes souhaitée ?"),
                    number("annualBudget", "Budget annuel estimé pour la gestion"),
                    text("deploymentDeadline", "Délai de déploiement souhaité"),
                    textarea("otherRemarks", "Autre remarque (optionnel)").optional(),
                ],
            ),
        ],
    )
}

fn collection() -> FormSchema {
    FormSchema::new(
        EntityKind::Collection,
        vec![
            FormSection::new(
                "INFORMATIONS ENTREPRISE",
                vec![
                    text("companyName", "Nom de l'entreprise"),
                    text("type", "Type (collecte, compostage, recyclage…)"),
                    text("headquarters", "Siège social (adresse)"),
                    textarea("interventionZones", "Zones d'intervention principales"),
                    number("citiesCovered", "Nombre de villes / communes couvertes"),
                    text("ceoName", "Nom du dirigeant"),
                    text("position", "Fonction"),
                    tel("phone", "Téléphone"),
                    email("email", "Email"),
                ],
            ),
            FormSection::new(
                "CAPACITÉS OPÉRATIONNELLES",
                vec![
                    number("vehicleCount", "Nombre de véhicules de collecte"),
                    number("driverCount", "Nombre de chauffeurs / agents"),
                    number("dailyCapacity", "Capacité de collecte quotidienne (tonnes)"),
                    textarea("wasteTypes", "Types de déchets traités"),
                    number("b2bClients", "Nombre de clients B2B actuels"),
                    number("individualClients", "Nombre de clients particuliers actuels"),
                    text("billingSystem", "Système de facturation actuel"),
                ],
            ),
            FormSection::new(
                "INTÉGRATION S.E.T.A.L.",
                vec![
                    yes_no("routeOptimization", "Optimisation des routes souhaitée ?"),
                    yes_no(
                        "mobileBilling",
                        "Facturation via Orange Money / Wave, Virement bancaire?",
                    ),
                    yes_no("gpsIntegration", "Intégration flotte GPS ?"),
                    yes_no("contractManagement", "Gestion des contrats via l'app ?"),
                    number("zonesToIntegrate", "Nombre de zones à intégrer"),
                    text("deploymentDeadline", "Délai de déploiement souhaité"),
                    textarea("otherRemarks", "Autre remarque (optionnel)").optional(),
                ],
            ),
        ],
    )
}

fn ministries() -> FormSchema {
    FormSchema::new(
        EntityKind::Ministries,
        vec![
            FormSection::new(
                "IDENTIFICATION",
                vec![
                    text("ministryName", "Nom du ministère / agence"),
                    text("department", "Direction concernée"),
                    textarea("geographicPerimeter", "Périmètre géographique (régions)"),
                    number("regionCount", "Nombre de régions / départements"),
                    text("projectHead", "Nom du responsable projet"),
                    text("position", "Fonction"),
                    tel("phone", "Téléphone"),
                    email("email", "Email officiel"),
                ],
            ),
            FormSection::new(
                "PÉRIMÈTRE ET OBJECTIFS",
                vec![
                    number("citiesToMonitor", "Nombre de villes à monitorer"),
                    textarea(
                        "mainObjective",
                        "Objectif principal (monitoring, politique publique…)",
                    ),
                    textarea("keyIndicators", "Indicateurs clés souhaités (KPIs)"),
                    yes_no("benchmarking", "Besoin de benchmarking inter-villes ?"),
                    yes_no("strategicReports", "Rapports stratégiques nécessaires ?"),
                    yes_no("databaseIntegration", "Intégration bases données nationales ?"),
                    yes_no("rawData", "Données brutes pour études ?"),
                ],
            ),
            FormSection::new(
                "BUDGET ET DÉLAI",
                vec![
                    number("annualBudget", "Budget annuel estimé"),
                    text("fundingSource", "Source de financement (budget État, subvention…)"),
                    text("deploymentDeadline", "Délai de déploiement souhaité"),
                    number("commitmentDuration", "Durée d'engagement souhaitée (mois)"),
                    textarea("otherRemarks", "Autre remarque (optionnel)").optional(),
                ],
            ),
        ],
    )
}

fn ngos() -> FormSchema {
    FormSchema::new(
        EntityKind::Ngos,
        vec![
            FormSection::new(
                "IDENTIFICATION ORGANISATION",
                vec![
                    text("orgName", "Nom de l'organisation"),
                    text("type", "Type (ONG, banque multilatérale, coopération…)"),
                    text("countryRegion", "Pays / région d'origine"),
                    text("dakarOfficeHead", "Bureau Dakar — nom du responsable"),
                    text("position", "Fonction"),
                    tel("phone", "Téléphone"),
                    email("email", "Email"),
                ],
            ),
            FormSection::new(
                "DÉTAILS DU PROJET",
                vec![
                    text("projectName", "Nom du projet"),
                    textarea("geographicZones", "Zones géographiques concernées"),
                    number("citiesTargeted", "Nombre de villes / communes ciblées"),
                    number("projectDuration", "Durée du projet (mois)"),
                    number("totalBudget", "Budget total projet estimé (FCFA)"),
                    number("digitalToolBudget", "Budget estimé pour outil numérique"),
                    textarea("mainObjectives", "Objectifs principaux du projet"),
                ],
            ),
            FormSection::new(
                "BESOINS MONITORING & ÉVALUATION",
                vec![
                    textarea("meIndicators", "Indicateurs Suivi & Évaluation requis"),
                    yes_no("impactReports", "Rapports d'impact nécessaires ?"),
                    text("publicationFormats", "Formats de publication requis"),
                    yes_no("cobranding", "Co-marquage (branding ONG + S.E.T.A.L.) ?"),
                    yes_no("localPartnerTraining", "Formation partenaires locaux incluse ?"),
                    textarea("donors", "Bailleurs concernés (pour alignement)"),
                    textarea("otherRemarks", "Autre remarque (optionnel)").optional(),
                ],
            ),
        ],
    )
}

fn economic_zones() -> FormSchema {
    FormSchema::new(
        EntityKind::EconomicZones,
        vec![
            FormSection::new(
                "IDENTIFICATION ZONE",
                vec![
                    text("zoneName", "Nom de la zone économique"),
                    text("type", "Type (zone industrielle, port, aéroport…)"),
                    text("location", "Localisation"),
                    number("area", "Superficie (hectares)"),
                    number("companyCount", "Nombre d'entreprises installées"),
                    text("managerName", "Nom du gestionnaire / directeur"),
                    text("position", "Fonction"),
                    tel("phone", "Téléphone"),
                    email("email", "Email"),
                ],
            ),
            FormSection::new(
                "SITUATION DÉCHETS ACTUELLE",
                vec![
                    number("dailyWasteVolume", "Volume de déchets/jour estimé (tonnes)"),
                    textarea("mainWasteTypes", "Types de déchets principaux"),
                    yes_no("hazardousWaste", "Déchets dangereux présents ?"),
                    number("currentCollectionPoints", "Nombre de points de collecte actuels"),
                    text("currentProvider", "Fournisseur de collecte actuel"),
                    yes_no("currentTrackingSystem", "Système de suivi actuel ?"),
                ],
            ),
            FormSection::new(
                "BESOINS SPÉCIFIQUES",
                vec![
                    yes_no("multiStreamSorting", "Tri sélectif multi-flux souhaité ?"),
                    yes_no("hazardousWasteTracking", "Traçabilité déchets dangereux ?"),
                    yes_no("regulatoryCompliance", "Conformité réglementaire requise ?"),
                    yes_no("iso14001", "Certification ISO 14001 en cours ?"),
                    yes_no("environmentalReports", "Rapports environnementaux nécessaires ?"),
                    text("deploymentDeadline", "Délai de déploiement souhaité"),
                    textarea("otherRemarks", "Autre remarque (optionnel)").optional(),
                ],
            ),
        ],
    )
}

fn events() -> FormSchema {
    FormSchema::new(
        EntityKind::Events,
        vec![
            FormSection::new(
                "IDENTIFICATION",
                vec![
                    text("infrastructureName", "Nom de l'infrastructure / événement"),
                    text("type", "Type (stade, centre commercial, hôtel, aéroport…)"),
                    text("location", "Localisation"),
                    number("capacity", "Capacité d'accueil (personnes)"),
                    text("responsibleName", "Nom du responsable"),
                    text("position", "Fonction"),
                    tel("phone", "Téléphone"),
                    email("email", "Email"),
                ],
            ),
            FormSection::new(
                "DÉTAILS ÉVÉNEMENT / INFRASTRUCTURE",
                vec![
                    select(
                        "eventType",
                        "Événement ponctuel ou permanent ?",
                        &["Ponctuel", "Permanent"],
                    ),
                    text("eventDates", "Dates de l'événement (si ponctuel)"),
                    number("estimatedDuration", "Durée estimée (jours)"),
                    number("dailyAttendance", "Affluence estimée (visiteurs/jour)"),
                    number("dailyWasteVolume", "Volume déchets estimé/jour (tonnes)"),
                    number("collectionPoints", "Nombre de points de collecte nécessaires"),
                    text("collectionFrequency", "Fréquence de collecte souhaitée"),
                ],
            ),
            FormSection::new(
                "BESOINS ET BUDGET",
                vec![
                    yes_no("peakDayCollection", "Collecte renforcée les jours de pics ?"),
                    yes_no("visitorCommunication", "Communication visiteurs intégrée ?"),
                    yes_no("realTimeReporting", "Reporting temps réel pour sponsors ?"),
                    number("estimatedBudget", "Budget estimé (FCFA)"),
                    select(
                        "billingPreference",
                        "Facturation souhaitée (mensuelle / par événement)",
                        &["Mensuelle", "Par événement"],
                    ),
                    textarea("otherRemarks", "Autre remarque (optionnel)").optional(),
                ],
            ),
        ],
    )
}

fn enterprises() -> FormSchema {
    FormSchema::new(
        EntityKind::Enterprises,
        vec![
            FormSection::new(
                "IDENTIFICATION ENTREPRISE",
                vec![
                    text("companyName", "Nom de l'entreprise"),
                    text("sector", "Secteur d'activité"),
                    text("headquarters", "Siège social (adresse)"),
                    number("sitesCount", "Nombre de sites / agences en Sénégal"),
                    number("employeeCount", "Nombre total d'employés au Sénégal"),
                    text(
                        "csrHead",
                        "Nom du responsable RSE (Responsabilité Sociétale des Entreprises)",
                    ),
                    text("position", "Fonction"),
                    tel("phone", "Téléphone"),
                    email("email", "Email"),
                ],
            ),
            FormSection::new(
                "PROGRAMME RSE ACTUEL",
                vec![
                    textarea("currentCsrProgram", "Programme RSE environnemental actuel ?"),
                    textarea("csrObjectives", "Objectifs RSE environnement"),
                    yes_no("carbonFootprint", "Bilan carbone déjà réalisé ?"),
                    textarea("sustainabilityCommitments", "Engagements développement durable"),
                    textarea("environmentalPartnerships", "Partenariats environnement actuels"),
                ],
            ),
            FormSection::new(
                "BESOINS S.E.T.A.L.",
                vec![
                    number("sitesToIntegrate", "Nombre de sites à intégrer"),
                    yes_no("employeeChallenges", "Challenges employés souhaités ?"),
                    yes_no(
                        "greenCertification",
                        "Certification \"Entreprise Verte\" souhaitée ?",
                    ),
                    yes_no("automaticCsrReports", "Rapports RSE automatiques nécessaires ?"),
                    yes_no("carbonOffset", "Compensation carbone souhaitée ?"),
                    yes_no("citizenVisibility", "Visibilité citoyenne (branding) ?"),
                    number("annualBudget", "Budget annuel estimé (FCFA)"),
                    textarea("otherRemarks", "Autre remarque (optionnel)").optional(),
                ],
            ),
        ],
    )
}

fn consortiums() -> FormSchema {
    FormSchema::new(
        EntityKind::Consortiums,
        vec![
            FormSection::new(
                "IDENTIFICATION CONSORTIUM",
                vec![
                    text("consortiumName", "Nom du consortium / partenariat"),
                    text("type", "Type (PPP, multi-acteurs…)"),
                    number("partnerCount", "Nombre de partenaires impliqués"),
                    textarea("mainPartners", "Noms des partenaires principaux"),
                    textarea("geographicZones", "Zones géographiques concernées"),
                    text("coordinatorName", "Nom du coordinateur"),
                    text("position", "Fonction"),
                    tel("phone", "Téléphone"),
                    email("email", "Email"),
                ],
            ),
            FormSection::new(
                "STRUCTURE ET GOUVERNANCE",
                vec![
                    textarea("roleDistribution", "Répartition des rôles entre partenaires"),
                    number("totalBudget", "Budget total du consortium estimé (FCFA)"),
                    textarea("budgetDistribution", "Répartition du budget souhaitée ?"),
                    yes_no("sharedGovernance", "Gouvernance partagée nécessaire ?"),
                    yes_no("contributionTracking", "Suivi des contributions de chaque partie ?"),
                ],
            ),
            FormSection::new(
                "BESOINS S.E.T.A.L.",
                vec![
                    yes_no("multiPartyPlatform", "Plateforme collaborative multi-parties ?"),
                    yes_no("consolidatedReports", "Rapports consolidés nécessaires ?"),
                    number("sitesZones", "Nombre de sites / zones à couvrir"),
                    text("deploymentDeadline", "Délai de déploiement souhaité"),
                    number("commitmentDuration", "Durée d'engagement (mois)"),
                    textarea("donorsFinanciers", "Bailleurs / financeurs concernés"),
                    textarea("otherRemarks", "Autre remarque (optionnel)").optional(),
                ],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_schema_has_unique_field_ids() {
        for kind in EntityKind::ALL {
            let schema = schema_for(kind);
            assert!(
                schema.check_unique_ids().is_ok(),
                "duplicate field id in schema for '{}'",
                kind.as_str()
            );
        }
    }

    #[test]
    fn every_schema_has_three_sections() {
        for kind in EntityKind::ALL {
            assert_eq!(schema_for(kind).sections.len(), 3, "{}", kind.as_str());
        }
    }

    #[test]
    fn tags_roundtrip_and_unknown_tags_resolve_to_none() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(EntityKind::from_str("nonexistent-entity"), None);
        assert_eq!(EntityKind::from_str(""), None);
        assert_eq!(EntityKind::from_str("PME"), None);
    }

    #[test]
    fn pme_schema_requires_company_name() {
        let schema = schema_for(EntityKind::Pme);
        let field = schema
            .fields()
            .find(|f| f.id == "companyName")
            .expect("companyName present");
        assert!(field.required);
        assert_eq!(field.field_type, FieldType::Text);
    }

    #[test]
    fn selects_declare_their_options_in_order() {
        let schema = schema_for(EntityKind::Events);
        let billing = schema
            .fields()
            .find(|f| f.id == "billingPreference")
            .expect("billingPreference present");
        assert_eq!(billing.field_type, FieldType::Select);
        assert_eq!(billing.options, vec!["Mensuelle", "Par événement"]);
    }

    #[test]
    fn catalog_order_is_stable() {
        assert_eq!(EntityKind::ALL[0], EntityKind::Pme);
        assert_eq!(EntityKind::ALL[8], EntityKind::Consortiums);
    }
}
