use std::collections::HashSet;
use std::path::Path;

use rust_embed::RustEmbed;
use weekmenu_shared::dish::{Catalog, Category};

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

pub const DEFAULT_CATALOG: &str = "default.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// `.toml` files are read as TOML, anything else as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

pub fn parse(input: &str, format: Format) -> weekmenu_shared::Result<Catalog> {
    let catalog: Catalog = match format {
        Format::Json => serde_json::from_str(input)?,
        Format::Toml => toml::from_str(input)?,
    };

    warn_duplicates(&catalog);

    Ok(catalog)
}

/// Strict read, surfaces I/O and parse errors.
pub fn read(path: impl AsRef<Path>) -> weekmenu_shared::Result<Catalog> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path)?;

    parse(&input, Format::from_path(path))
}

/// Reads a catalog file. Any failure is logged and yields an empty catalog.
pub fn load(path: impl AsRef<Path>) -> Catalog {
    let path = path.as_ref();

    match read(path) {
        Ok(catalog) => {
            tracing::info!(
                path = %path.display(),
                main_meat = catalog.main_meat.len(),
                semi_meat = catalog.semi_meat.len(),
                veggie = catalog.veggie.len(),
                "catalog loaded"
            );
            catalog
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load catalog, using an empty one");
            Catalog::empty()
        }
    }
}

/// The catalog compiled into the binary.
pub fn embedded() -> Catalog {
    let Some(file) = Assets::get(DEFAULT_CATALOG) else {
        tracing::warn!("embedded catalog {DEFAULT_CATALOG} not found");
        return Catalog::empty();
    };

    let parsed = std::str::from_utf8(&file.data)
        .map_err(|err| weekmenu_shared::Error::Catalog(err.to_string()))
        .and_then(|input| parse(input, Format::Json));

    match parsed {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::warn!(error = %err, "embedded catalog is invalid");
            Catalog::empty()
        }
    }
}

pub fn load_or_embedded(path: Option<&Path>) -> Catalog {
    match path {
        Some(path) => load(path),
        None => embedded(),
    }
}

fn warn_duplicates(catalog: &Catalog) {
    for category in Category::ALL {
        let mut seen = HashSet::new();
        for dish in catalog.dishes(category) {
            if !seen.insert(dish.name.as_str()) {
                tracing::warn!(%category, name = %dish.name, "duplicate dish name in category");
            }
        }
    }
}
