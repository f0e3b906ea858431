use rmcp::ServiceExt;
use rmcp::model::CallToolRequestParams;
use rmcp::transport::TokioChildProcess;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

fn server_binary() -> PathBuf {
    std::env::var("CARGO_BIN_EXE_wellness_mcp")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let manifest_dir = PathBuf::from(
                std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"),
            );
            let workspace_root = manifest_dir
                .parent()
                .and_then(|p| p.parent())
                .unwrap_or(&manifest_dir)
                .to_path_buf();
            let target_root = std::env::var("CARGO_TARGET_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| workspace_root.join("target"));
            let mut path = target_root.join("debug");
            path.push(if cfg!(windows) {
                "wellness_mcp.exe"
            } else {
                "wellness_mcp"
            });
            path
        })
}

fn args(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    value.as_object().cloned().unwrap_or_default()
}

#[tokio::test]
async fn e2e_stdio_registers_profile_and_reads_metrics() {
    let mut cmd = Command::new(server_binary());
    cmd.env("WELLNESS_COACH_DELAY_MS", "0");
    cmd.env("WELLNESS_COACH_JITTER_MS", "0");
    cmd.env("RUST_LOG", "debug");

    let (child, mut stderr_opt) = TokioChildProcess::builder(cmd)
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn child");
    let service = match ().serve(child).await {
        Ok(s) => s,
        Err(e) => {
            if let Some(ref mut stderr) = stderr_opt {
                use tokio::io::AsyncReadExt;
                let mut buf = String::new();
                let _ = stderr.read_to_string(&mut buf).await;
                eprintln!("child stderr:\n{}", buf);
            }
            panic!("serve failed: {e}");
        }
    };

    let tools = service
        .list_tools(Default::default())
        .await
        .expect("list tools");
    let names: Vec<_> = tools
        .tools
        .into_iter()
        .map(|t| t.name.to_string())
        .collect();
    assert!(names.iter().any(|n| n == "register_profile"));
    assert!(names.iter().any(|n| n == "get_health_metrics"));
    assert!(names.iter().any(|n| n == "list_workouts"));

    let profile = args(serde_json::json!({
        "email": "e2e@example.com",
        "name": "E2E",
        "age": 30,
        "gender": "male",
        "weight": 80.0,
        "height": 180.0,
        "fitness_goal": "lose_weight",
        "activity_level": "moderately_active"
    }));
    let res = service
        .call_tool(CallToolRequestParams::new("register_profile").with_arguments(profile))
        .await
        .expect("register");
    assert!(res.structured_content.is_some());

    let res = service
        .call_tool(CallToolRequestParams::new("get_health_metrics"))
        .await
        .expect("metrics");
    let v = res.structured_content.expect("structured content");
    assert_eq!(v["metrics"]["daily_calories"], serde_json::json!(2207));
    assert_eq!(v["metrics"]["bmi_category"], serde_json::json!("normal"));

    let res = service
        .call_tool(
            CallToolRequestParams::new("list_workouts")
                .with_arguments(args(serde_json::json!({ "kind": "strength" }))),
        )
        .await
        .expect("list workouts");
    let v = res.structured_content.expect("structured content");
    assert_eq!(v["workouts"].as_array().map(|a| a.len()), Some(1));

    service.cancel().await.expect("cancel");
}
