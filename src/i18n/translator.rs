use std::{collections::HashMap, fs, io, path::Path};

pub type Catalog = HashMap<String, String>;

/// Looks message keys up in per-locale catalogs.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    default_locale: String,
    catalogs: HashMap<String, Catalog>,
}

impl Translator {
    pub fn new(default_locale: &str) -> Self {
        Self {
            default_locale: default_locale.to_lowercase(),
            catalogs: HashMap::new(),
        }
    }

    pub fn with_catalog(mut self, locale: &str, catalog: Catalog) -> Self {
        self.catalogs.insert(locale.to_lowercase(), catalog);
        self
    }

    /// Loads every `<locale>.json` file in `dir`. Each file is a flat object of
    /// message key to translated text.
    pub fn load(dir: impl AsRef<Path>, default_locale: &str) -> io::Result<Self> {
        let mut translator = Self::new(default_locale);

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let catalog: Catalog = serde_json::from_slice(&fs::read(&path)?)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

            tracing::debug!(locale = locale, entries = catalog.len(), "loaded catalog");
            translator = translator.with_catalog(locale, catalog);
        }

        Ok(translator)
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.catalogs.contains_key(locale)
    }

    /// Falls back to the default locale, then to the key itself.
    pub fn translate(&self, locale: &str, key: &str) -> String {
        [locale, self.default_locale.as_str()]
            .iter()
            .find_map(|locale| self.catalogs.get(*locale).and_then(|catalog| catalog.get(key)))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
