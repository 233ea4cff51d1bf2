mod common;

use common::TestEnv;

#[test]
fn summarize_requires_api_key() {
    let env = TestEnv::new();
    let transcript = env.write_file("call.txt", "Patient reports headache.");

    let output = env.run(&["summarize", transcript.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("OpenAI API key is missing"),
        "expected missing key error, got:\n{}",
        stderr
    );
}

#[test]
fn serve_refuses_to_start_without_api_key() {
    let output = TestEnv::new().run(&["serve", "--addr", "127.0.0.1:0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("API key is missing"), "stderr:\n{}", stderr);
}

#[test]
fn summarize_rejects_unknown_provider() {
    let env = TestEnv::new();
    env.write_config("[llm]\nprovider = \"carrier-pigeon\"\napi_key = \"k\"\n");
    let transcript = env.write_file("call.txt", "hi");

    let output = env.run(&["summarize", transcript.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Unsupported llm.provider"), "stderr:\n{}", stderr);
}

#[test]
fn unreachable_endpoint_is_reported_as_upstream_error() {
    let env = TestEnv::new();
    env.write_config(
        "[llm]\napi_key = \"sk-test\"\nendpoint = \"http://127.0.0.1:9\"\ntimeout_secs = 5\n",
    );
    let transcript = env.write_file("call.txt", "Patient reports headache.");

    let output = env.run(&["summarize", transcript.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("LLM_error"), "stderr:\n{}", stderr);
}
