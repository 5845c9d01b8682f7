// Champion catalog fetched once from Riot's Data Dragon CDN.
//
// The catalog is the drag source for the draft board. It is loaded a single
// time at startup and held in memory; a failed load is logged by the caller
// and never retried.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::draft::ChampionPick;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {message}")]
    Network { message: String },

    #[error("catalog response malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One selectable champion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionEntry {
    /// Stable catalog key, e.g. "MonkeyKing".
    pub id: String,
    /// Locale-specific display name, e.g. "Wukong".
    pub name: String,
    /// Icon file name as published by the catalog (`image.full`).
    pub icon_ref: String,
}

impl ChampionEntry {
    /// The drag payload for this champion.
    pub fn to_pick(&self) -> ChampionPick {
        ChampionPick::new(self.id.clone(), self.icon_ref.clone())
    }
}

// -- Data Dragon wire shape --

#[derive(Debug, Deserialize)]
struct ChampionFile {
    data: BTreeMap<String, RawChampion>,
}

#[derive(Debug, Deserialize)]
struct RawChampion {
    id: String,
    name: String,
    image: RawImage,
}

#[derive(Debug, Deserialize)]
struct RawImage {
    full: String,
}

/// URL of the `champion.json` document for the configured patch and locale.
pub fn data_url(config: &CatalogConfig) -> String {
    format!(
        "{}/{}/data/{}/champion.json",
        config.base_url.trim_end_matches('/'),
        config.version,
        config.locale
    )
}

/// The in-memory list of champions, in catalog key order.
#[derive(Debug, Clone, Default)]
pub struct ChampionCatalog {
    entries: Vec<ChampionEntry>,
    icon_base: String,
}

impl ChampionCatalog {
    /// GET the catalog document and parse it. A transport error or a
    /// non-success status is a `Network` error.
    pub async fn fetch(
        http: &reqwest::Client,
        config: &CatalogConfig,
    ) -> Result<Self, CatalogError> {
        let url = data_url(config);
        debug!("Fetching champion catalog from {}", url);

        let network = |e: reqwest::Error| CatalogError::Network {
            message: e.to_string(),
        };

        let resp = http.get(&url).send().await.map_err(network)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Network {
                message: format!("{url} returned status {status}"),
            });
        }
        let body = resp.text().await.map_err(network)?;

        let catalog = Self::from_json(&body, config)?;
        info!(
            "Loaded {} champions (patch {}, locale {})",
            catalog.len(),
            config.version,
            config.locale
        );
        Ok(catalog)
    }

    /// Parse a `champion.json` body.
    pub fn from_json(body: &str, config: &CatalogConfig) -> Result<Self, CatalogError> {
        let file: ChampionFile = serde_json::from_str(body)?;
        let entries = file
            .data
            .into_values()
            .map(|raw| ChampionEntry {
                id: raw.id,
                name: raw.name,
                icon_ref: raw.image.full,
            })
            .collect();
        Ok(Self::from_entries(entries, config))
    }

    pub fn from_entries(entries: Vec<ChampionEntry>, config: &CatalogConfig) -> Self {
        ChampionCatalog {
            entries,
            icon_base: format!(
                "{}/{}/img/champion",
                config.base_url.trim_end_matches('/'),
                config.version
            ),
        }
    }

    pub fn entries(&self) -> &[ChampionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ChampionEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Case-insensitive substring match on display name, lazily over the
    /// full catalog. A blank query matches everything.
    pub fn filter<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a ChampionEntry> + 'a {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(move |e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
    }

    /// Full icon URL for a catalog icon file name.
    pub fn icon_url(&self, icon_ref: &str) -> String {
        format!("{}/{}", self.icon_base, icon_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CatalogConfig {
        CatalogConfig {
            base_url: "https://ddragon.leagueoflegends.com/cdn/".into(),
            version: "15.1.1".into(),
            locale: "pt_BR".into(),
        }
    }

    const SAMPLE: &str = r#"{
        "type": "champion",
        "version": "15.1.1",
        "data": {
            "Aatrox": { "id": "Aatrox", "key": "266", "name": "Aatrox",
                        "image": { "full": "Aatrox.png", "sprite": "champion0.png" } },
            "Ahri": { "id": "Ahri", "name": "Ahri", "image": { "full": "Ahri.png" } },
            "Kaisa": { "id": "Kaisa", "name": "Kai'Sa", "image": { "full": "Kaisa.png" } },
            "MonkeyKing": { "id": "MonkeyKing", "name": "Wukong",
                            "image": { "full": "MonkeyKing.png" } },
            "Naafiri": { "id": "Naafiri", "name": "Naafiri", "image": { "full": "Naafiri.png" } },
            "Zaahen": { "id": "Zaahen", "name": "ZAAHEN", "image": { "full": "Zaahen.png" } }
        }
    }"#;

    #[test]
    fn data_url_uses_version_and_locale() {
        assert_eq!(
            data_url(&config()),
            "https://ddragon.leagueoflegends.com/cdn/15.1.1/data/pt_BR/champion.json"
        );
    }

    #[test]
    fn parses_entries_in_key_order() {
        let catalog = ChampionCatalog::from_json(SAMPLE, &config()).unwrap();
        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["Aatrox", "Ahri", "Kaisa", "MonkeyKing", "Naafiri", "Zaahen"]
        );
        let wukong = catalog.get("MonkeyKing").unwrap();
        assert_eq!(wukong.name, "Wukong");
        assert_eq!(wukong.icon_ref, "MonkeyKing.png");
    }

    #[test]
    fn filter_aa_is_case_insensitive_and_ordered() {
        let catalog = ChampionCatalog::from_json(SAMPLE, &config()).unwrap();
        let names: Vec<&str> = catalog.filter("aa").map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Aatrox", "Naafiri", "ZAAHEN"]);
        for name in names {
            assert!(name.to_lowercase().contains("aa"));
        }
    }

    #[test]
    fn filter_is_non_destructive() {
        let catalog = ChampionCatalog::from_json(SAMPLE, &config()).unwrap();
        assert_eq!(catalog.filter("wuk").count(), 1);
        assert_eq!(catalog.filter("").count(), catalog.len());
        assert_eq!(catalog.filter("  ").count(), catalog.len());
        assert_eq!(catalog.filter("zzz").count(), 0);
    }

    #[test]
    fn filter_matches_display_name_not_id() {
        let catalog = ChampionCatalog::from_json(SAMPLE, &config()).unwrap();
        assert_eq!(catalog.filter("monkey").count(), 0);
        assert_eq!(catalog.filter("kai'").count(), 1);
    }

    #[test]
    fn icon_url_uses_authoritative_file_name() {
        let catalog = ChampionCatalog::from_json(SAMPLE, &config()).unwrap();
        let entry = catalog.get("MonkeyKing").unwrap();
        assert_eq!(
            catalog.icon_url(&entry.icon_ref),
            "https://ddragon.leagueoflegends.com/cdn/15.1.1/img/champion/MonkeyKing.png"
        );
        let pick = entry.to_pick();
        assert_eq!(pick.id, "MonkeyKing");
        assert_eq!(pick.icon_ref, "MonkeyKing.png");
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = ChampionCatalog::from_json(r#"{"data": [1, 2]}"#, &config()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));

        let missing_image = r#"{"data": {"Ahri": {"id": "Ahri", "name": "Ahri"}}}"#;
        assert!(ChampionCatalog::from_json(missing_image, &config()).is_err());
    }
}
