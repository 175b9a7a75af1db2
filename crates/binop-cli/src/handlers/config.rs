//! Config command handler

use std::io::Write;

use binop_calculator::config::CalculatorConfig;

use crate::commands::{ConfigArgs, ConfigOutputFormat};
use crate::error::CliResult;

/// Execute the config command: print the effective configuration
pub fn execute_config<W: Write>(
    config: &CalculatorConfig,
    args: &ConfigArgs,
    out: &mut W,
) -> CliResult<()> {
    match args.format {
        ConfigOutputFormat::Yaml => write!(out, "{}", config.to_yaml()?)?,
        ConfigOutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, config)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use binop_calculator::session::ReplayPolicy;

    fn render(config: &CalculatorConfig, format: ConfigOutputFormat) -> String {
        let mut out = Vec::new();
        execute_config(config, &ConfigArgs { format }, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_yaml_output_loads_back() {
        let config = CalculatorConfig::new().with_replay_policy(ReplayPolicy::CurrentInputs);
        let yaml = render(&config, ConfigOutputFormat::Yaml);
        assert!(yaml.contains("replay_policy: current-inputs"));
        assert_eq!(CalculatorConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_json_output() {
        let json = render(&CalculatorConfig::default(), ConfigOutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["replay_policy"], "remembered-operands");
        assert_eq!(value["animation_ms"], 300);
        assert_eq!(value["highlight_ms"], 200);
    }
}
