use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};
use anyhow::Result;
use georegion_core::config::LayeredConfig;
use std::collections::BTreeMap;
use tabled::Tabled;

#[derive(Tabled)]
struct ConfigRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Source")]
    source: String,
}

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    // Keyed by name so the table is stable
    let entries: BTreeMap<String, ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| (key, ConfigEntry { value, source: source.to_string() }))
        .collect();

    if output.is_json() {
        let take = |key: &str| {
            entries.get(key).cloned().unwrap_or_else(|| ConfigEntry {
                value: String::new(),
                source: "unset".to_string(),
            })
        };

        return output.result(ConfigOutput {
            sphere_radius_meters: take("sphere_radius_meters"),
            geodesic: take("geodesic"),
            polygon_sides: take("polygon_sides"),
            distance_unit: take("distance_unit"),
            parallel_threshold: take("parallel_threshold"),
        });
    }

    output.section("Configuration Values");
    output.table(
        entries
            .into_iter()
            .map(|(key, entry)| ConfigRow { key, value: entry.value, source: entry.source })
            .collect(),
    );

    output.section("Configuration Precedence");
    output.info("CLI arguments > Environment variables > Config file > Defaults");

    Ok(())
}
