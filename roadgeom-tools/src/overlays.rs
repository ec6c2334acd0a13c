//! Builds the optional overlay sections of a container from CSV inputs.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::info;
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};

use roadgeom_core::prelude::*;

#[derive(Debug, Deserialize)]
struct MaxspeedRow {
    id: FeatureId,
    forward_km_h: u16,
    #[serde(default)]
    backward_km_h: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct CityRoadRow {
    id: FeatureId,
}

pub fn run(
    map: &Path,
    maxspeeds: Option<&Path>,
    city_roads: Option<&Path>,
    out: &Path,
) -> anyhow::Result<()> {
    let mut doc: JsonValue = serde_json::from_str(&fs::read_to_string(map)?)
        .with_context(|| format!("reading container {}", map.display()))?;
    let sections = doc
        .as_object_mut()
        .context("container document must be a JSON object")?
        .entry("sections")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .context("sections must be a JSON object")?;

    if let Some(path) = city_roads {
        let mut ids: Vec<FeatureId> = read_rows::<CityRoadRow>(path)?
            .into_iter()
            .map(|row| row.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        info!("{}: {} city roads", path.display(), ids.len());
        sections.insert(section::CITY_ROADS.to_owned(), json!(ids));
    }

    if let Some(path) = maxspeeds {
        let records: Vec<MaxspeedRecord> = read_rows::<MaxspeedRow>(path)?
            .into_iter()
            .map(|row| MaxspeedRecord {
                id: row.id,
                maxspeed: Maxspeed {
                    forward_km_h: Some(row.forward_km_h),
                    backward_km_h: row.backward_km_h,
                },
            })
            .collect();
        info!("{}: {} maxspeed entries", path.display(), records.len());
        sections.insert(
            section::MAXSPEEDS.to_owned(),
            serde_json::to_value(records)?,
        );
    }

    fs::write(out, serde_json::to_string_pretty(&doc)?)?;
    info!("wrote {}", out.display());
    Ok(())
}

fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> anyhow::Result<Vec<T>> {
    csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .with_context(|| format!("parsing {}", path.display()))
}
