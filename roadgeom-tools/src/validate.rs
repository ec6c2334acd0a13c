//! Full-container validation pass over the file-backed loader.

use std::path::Path;
use std::sync::Arc;

use log::info;

use roadgeom_core::prelude::*;

use crate::profile::Profile;

#[derive(Debug, Default)]
struct Report {
    roads: usize,
    invalid: usize,
    one_way: usize,
    in_city: usize,
    ferries: usize,
    total_length_km: f64,
}

pub fn run(map: &Path, profile: &Path, cache_size: usize) -> anyhow::Result<()> {
    let profile = Profile::from_path(profile)?;
    info!("validating {} with profile {}", map.display(), profile.name);

    let vehicle: SharedVehicleModel = Arc::new(profile.vehicle_model());
    let classifier = Arc::new(profile.classifier());
    let loader = FlatFileRoadLoader::new(map, vehicle, classifier)?;

    let mut ids: Vec<FeatureId> = loader.map().feature_ids().collect();
    ids.sort_unstable();
    let map_name = loader.map().name().to_owned();

    let mut cache = RoadCache::new(Box::new(loader), cache_size);
    let mut report = Report::default();
    for id in ids {
        let road = cache.get_road(id)?;
        report.roads += 1;
        if !road.is_valid() {
            report.invalid += 1;
            continue;
        }
        if road.is_one_way() {
            report.one_way += 1;
        }
        if road.is_in_city() {
            report.in_city += 1;
        }
        if road.options().has(RoutingOption::Ferry) {
            report.ferries += 1;
        }
        report.total_length_km += road.length_m() / 1000.0;
    }

    println!("map {map_name}: {} features", report.roads);
    println!("  invalid:  {}", report.invalid);
    println!("  one-way:  {}", report.one_way);
    println!("  in-city:  {}", report.in_city);
    println!("  ferries:  {}", report.ferries);
    println!("  length:   {:.1} km (valid roads)", report.total_length_km);
    Ok(())
}
