use i18n_lens::mcp::{I18nLensMcpServer, types::HoverParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{extract_tool_result_json, fixture_multi_namespace};

const FORM: &str = r#"export function Form() {
  const { t } = useTranslation(["errors", "common"]);
  return <p>{t($ => $.greeting.hello?.trim())}</p>;
}
"#;

fn params(root: String, line: u32, column: u32) -> Parameters<HoverParams> {
    Parameters(HoverParams {
        project_root_path: root,
        file_path: "src/form.tsx".to_string(),
        line,
        column,
    })
}

#[tokio::test]
async fn test_hover() {
    let fixture = fixture_multi_namespace().unwrap();
    fixture.write_source_file("src/form.tsx", FORM).unwrap();
    let server = I18nLensMcpServer::new();

    let result = server.hover(params(fixture.root(), 3, 25)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["key"], "greeting.hello");
    assert_eq!(json_result["candidates"], json!(["errors", "common"]));
    assert_eq!(json_result["namespaces"], json!(["common"]));
    assert_eq!(
        json_result["entries"],
        json!([
            {"language": "de", "matchedNamespace": "common", "value": "Hallo"},
            {"language": "en", "matchedNamespace": "common", "value": "Hello"}
        ])
    );
}

#[tokio::test]
async fn test_hover_outside_call_site_is_null() {
    let fixture = fixture_multi_namespace().unwrap();
    fixture.write_source_file("src/form.tsx", FORM).unwrap();
    let server = I18nLensMcpServer::new();

    let result = server.hover(params(fixture.root(), 1, 3)).await.unwrap();

    assert!(extract_tool_result_json(&result).is_null());
}

#[tokio::test]
async fn test_hover_position_outside_file() {
    let fixture = fixture_multi_namespace().unwrap();
    fixture.write_source_file("src/form.tsx", FORM).unwrap();
    let server = I18nLensMcpServer::new();

    assert!(server.hover(params(fixture.root(), 40, 1)).await.is_err());
}
