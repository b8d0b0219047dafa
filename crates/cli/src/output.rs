use crate::error::CliError;
use connectors::{grpc::filter::Filters, rest::filter::RestFilter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Grpc,
    Rest,
    Both,
}

impl OutputFormat {
    pub fn includes_grpc(&self) -> bool {
        matches!(self, OutputFormat::Grpc | OutputFormat::Both)
    }

    pub fn includes_rest(&self) -> bool {
        matches!(self, OutputFormat::Rest | OutputFormat::Both)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grpc" => Ok(OutputFormat::Grpc),
            "rest" => Ok(OutputFormat::Rest),
            "both" => Ok(OutputFormat::Both),
            _ => Err(format!("Unsupported output format: {s}")),
        }
    }
}

pub fn render_grpc(filters: &Filters, bytes: &[u8]) -> String {
    format!("{filters:#?}\nbytes ({}): {}", bytes.len(), hex::encode(bytes))
}

pub fn render_rest(filter: &RestFilter, pretty: bool) -> Result<String, CliError> {
    let doc = filter.to_json().map_err(CliError::JsonSerialize)?;
    if pretty {
        serde_json::to_string_pretty(&doc).map_err(CliError::JsonSerialize)
    } else {
        serde_json::to_string(&doc).map_err(CliError::JsonSerialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectors::grpc::filter::filters::{Operator, TestValue};

    #[test]
    fn test_parse_output_format() {
        assert_eq!("GRPC".parse::<OutputFormat>(), Ok(OutputFormat::Grpc));
        assert_eq!("both".parse::<OutputFormat>(), Ok(OutputFormat::Both));
        assert!("xml".parse::<OutputFormat>().is_err());

        assert!(OutputFormat::Both.includes_grpc());
        assert!(OutputFormat::Both.includes_rest());
        assert!(!OutputFormat::Rest.includes_grpc());
    }

    #[test]
    fn test_render_grpc_lists_bytes() {
        let filters = Filters::leaf(
            Operator::Equal,
            vec!["age".into()],
            Some(TestValue::ValueInt(1)),
        );
        let rendered = render_grpc(&filters, &[0x08, 0x01, 0xff]);
        assert!(rendered.ends_with("bytes (3): 0801ff"));
        assert!(rendered.contains("ValueInt"));
    }

    #[test]
    fn test_render_rest_compact() {
        let filter = RestFilter::value("IsNull", vec!["name".into()], None);
        assert_eq!(
            render_rest(&filter, false).unwrap(),
            r#"{"operator":"IsNull","path":["name"]}"#
        );
    }
}
