use console::style;
use georegion_core::GeoregionError;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Error shown to the user with context and ways to fix it
#[derive(Serialize)]
pub struct CliError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    #[serde(rename = "help", skip_serializing_if = "Option::is_none")]
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), context: None, suggestions: Vec::new(), help_command: None }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    /// Print to stderr, as a JSON document when `json` is set
    pub fn display(&self, json: bool) {
        if json {
            let output = serde_json::json!({ "status": "error", "error": self });
            eprintln!("{}", output);
            return;
        }

        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(context) = &self.context {
            eprintln!("{}\n", context);
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(help_cmd) = &self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a missing input file
pub fn input_not_found(path: &Path) -> CliError {
    CliError::new("Input file not found")
        .with_context(format!("The specified input file does not exist.\n\nPath: {}", path.display()))
        .with_suggestion("Check the file path and try again")
        .with_suggestion("Use \"-\" to read GeoJSON from stdin")
        .with_help("Run: georegion --help")
}

/// Create error for input that is not GeoJSON
pub fn invalid_input(source: &str, reason: impl fmt::Display) -> CliError {
    CliError::new("Input is not valid GeoJSON")
        .with_context(format!("Could not parse the input as GeoJSON.\n\nSource: {}\nError: {}", source, reason))
        .with_suggestion("Provide a FeatureCollection, Feature, Point or MultiPoint")
        .with_suggestion("Coordinates must be [longitude, latitude] in degrees")
}

/// Create error for a missing config file given with --config
pub fn config_not_found(path: &Path) -> CliError {
    CliError::new("Configuration file not found")
        .with_context(format!("The file passed with --config does not exist.\n\nPath: {}", path.display()))
        .with_suggestion("Check the path, or drop --config to use ./georegion.toml")
        .with_help("Run: georegion config")
}

/// Create error for a radius that cannot be parsed
pub fn invalid_radius(value: &str, reason: impl fmt::Display) -> CliError {
    CliError::new("Invalid radius")
        .with_context(format!("Could not read the radius '{}'.\n\nError: {}", value, reason))
        .with_suggestion("Use a number with an optional unit: 500, 250m, 5km, 3mi, 1000ft")
        .with_suggestion("Set the unit for bare numbers with GEOREGION_DISTANCE_UNIT")
}

/// Create error for a command-line option the configuration rejects
pub fn invalid_option(err: &GeoregionError) -> CliError {
    let suggestion = match err {
        GeoregionError::ConfigInvalid { key, .. } if key == "polygon_sides" => {
            "--sides must be 3 or more"
        }
        _ => "--sphere-radius must be a positive number of meters",
    };

    CliError::new("Invalid option")
        .with_context(err.to_string())
        .with_suggestion(suggestion)
        .with_help("Run: georegion --help")
}

/// Map a rejected shape to an error with fix suggestions
pub fn invalid_shape(err: &GeoregionError, command: &str) -> CliError {
    let help = format!("Run: georegion {} --help", command);

    match err {
        GeoregionError::InvalidGeometry { shape, reason } => CliError::new("Invalid geometry")
            .with_context(format!("The {} cannot be used as a region.\n\n{}", shape, reason))
            .with_suggestion("Circles need a radius of zero or more")
            .with_suggestion("Polygons need at least 3 distinct --vertex values")
            .with_help(help),
        GeoregionError::InvalidCoordinate { location, reason } => {
            CliError::new("Invalid coordinate")
                .with_context(format!("{}: {}", location, reason))
                .with_suggestion("Longitude must be within [-180, 180]")
                .with_suggestion("Latitude must be within [-90, 90]")
                .with_suggestion("Coordinates are written LON,LAT (longitude first)")
                .with_help(help)
        }
        other => CliError::new(other.to_string()).with_help(help),
    }
}
