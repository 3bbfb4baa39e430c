use i18n_lens::mcp::{I18nLensMcpServer, types::InlineHintsParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{extract_tool_result_json, fixture_multi_namespace};

#[tokio::test]
async fn test_inline_hints() {
    let fixture = fixture_multi_namespace().unwrap();
    fixture
        .write_source_file(
            "src/app.tsx",
            r#"const a = t($ => $.greeting.hello);
const b = <Trans i18nKey="errors:network.timeout" />;
const c = t($ => $.greeting.bye);
const d = t($ => $.title.trim());
"#,
        )
        .unwrap();

    let server = I18nLensMcpServer::new();
    let params = Parameters(InlineHintsParams {
        project_root_path: fixture.root(),
        file_path: "src/app.tsx".to_string(),
    });

    let result = server.inline_hints(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filePath"], "src/app.tsx");
    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["missingCount"], 1);

    let hints = json_result["hints"].as_array().unwrap();
    assert_eq!(hints[0]["key"], "greeting.hello");
    assert_eq!(hints[0]["label"], "i18n[en]: Hello");
    assert_eq!(hints[0]["matchedNamespace"], "common");
    assert_eq!(hints[0]["position"], json!({"line": 1, "column": 35}));
    assert_eq!(hints[0]["blockLines"], json!(["de: Hallo", "en: Hello"]));

    assert_eq!(hints[1]["namespaces"], json!(["errors"]));
    assert_eq!(hints[1]["value"], "Request timed out");

    assert_eq!(hints[2]["key"], "greeting.bye");
    assert!(hints[2]["value"].is_null());
    assert_eq!(hints[2]["label"], "i18n[en]: <missing>");
}

#[tokio::test]
async fn test_inline_hints_missing_file() {
    let fixture = fixture_multi_namespace().unwrap();
    let server = I18nLensMcpServer::new();

    let params = Parameters(InlineHintsParams {
        project_root_path: fixture.root(),
        file_path: "src/nope.tsx".to_string(),
    });

    assert!(server.inline_hints(params).await.is_err());
}

#[tokio::test]
async fn test_inline_hints_absolute_path() {
    let fixture = fixture_multi_namespace().unwrap();
    fixture
        .write_source_file("lib/util.js", "export const s = t($ => $.title);\n")
        .unwrap();
    let server = I18nLensMcpServer::new();

    let params = Parameters(InlineHintsParams {
        project_root_path: fixture.root(),
        file_path: fixture
            .root_path()
            .join("lib/util.js")
            .to_string_lossy()
            .to_string(),
    });

    let result = server.inline_hints(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filePath"], "lib/util.js");
    assert_eq!(json_result["hints"][0]["value"], "Home");
}
