use std::{sync::Arc, thread};

use pretty_assertions::assert_eq;
use sandcalc::{
    api::{CalcResponse, respond},
    server::{route, run},
};
use serde_json::{Value, json};
use tiny_http::{Method, Server};

fn call(expression: &str) -> (u16, Value) {
    let body = json!({ "expression": expression }).to_string();
    let (status, response) = respond(body.as_bytes());
    (status, serde_json::to_value(&response).expect("response serializes"))
}

#[test]
fn success_returns_the_number() {
    assert_eq!(call("2 + 3 * 4"), (200, json!({ "ok": true, "result": 14 })));
    assert_eq!(call("1 / 4"), (200, json!({ "ok": true, "result": 0.25 })));
    assert_eq!(call("sqrt(16)"), (200, json!({ "ok": true, "result": 4 })));
    assert_eq!(call("  5!  "), (200, json!({ "ok": true, "result": 120 })));
}

#[test]
fn large_integers_keep_every_digit() {
    let (status, response) = respond(br#"{"expression": "2 ** 200"}"#);

    assert_eq!(status, 200);
    assert_eq!(serde_json::to_string(&response).unwrap(),
               r#"{"ok":true,"result":1606938044258990275541962092341162602522202993782792835301376}"#);
}

#[test]
fn missing_expression() {
    let expected = (400, json!({ "ok": false, "error": "No expression provided." }));

    assert_eq!(call(""), expected);
    assert_eq!(call(" \t "), expected);

    let (status, response) = respond(b"{}");
    assert_eq!((status, serde_json::to_value(&response).unwrap()), expected);

    let (status, response) = respond(b"this is not json");
    assert_eq!((status, serde_json::to_value(&response).unwrap()), expected);
}

#[test]
fn division_by_zero_has_its_own_message() {
    for src in ["1/0", "1//0", "1%0", "0 ** -1", "log(5, 1)"] {
        assert_eq!(call(src), (400, json!({ "ok": false, "error": "Division by zero." })), "{src}");
    }
}

#[test]
fn other_failures_share_one_message() {
    for src in ["__import__('os')", "os.system('x')", "fact(-1)", "1 +", "sqrt(-1)", "5 $ 3"] {
        assert_eq!(call(src),
                   (400, json!({ "ok": false, "error": "Unable to parse expression." })),
                   "{src}");
    }
}

#[test]
fn non_finite_results_are_rejected() {
    assert_eq!(call("1e308 * 10"),
               (400, json!({ "ok": false, "error": "Result is not a finite number." })));
}

#[test]
fn oversized_bodies_are_refused() {
    let body = format!(r#"{{"expression": "1 + 1"{}}}"#, " ".repeat(65 * 1024));
    let (status, response) = route(&Method::Post, "/api/calc", body.as_bytes());

    assert_eq!((status, response), (413, CalcResponse::failure("Request body too large.")));

    let body = format!(r#"{{"expression": "1 + 1"{}}}"#, " ".repeat(60 * 1024));
    assert_eq!(route(&Method::Post, "/api/calc", body.as_bytes()).0, 200);
}

#[test]
fn server_answers_over_http() {
    let server = Arc::new(Server::http("127.0.0.1:0").expect("bind test server"));
    let addr = server.server_addr().to_ip().expect("tcp listener");
    let url = format!("http://{addr}/api/calc");

    let workers = Arc::clone(&server);
    thread::spawn(move || run(&workers, 2));

    let response = ureq::post(&url).set("Content-Type", "application/json")
                                   .send_string(r#"{"expression": "3!!"}"#)
                                   .expect("request succeeds");
    assert_eq!(response.status(), 200);
    assert_eq!(response.header("Content-Type"), Some("application/json"));
    let body: Value = response.into_json().expect("json body");
    assert_eq!(body, json!({ "ok": true, "result": 720 }));

    match ureq::post(&url).send_string(r#"{"expression": "1/0"}"#) {
        Err(ureq::Error::Status(status, response)) => {
            assert_eq!(status, 400);
            let body: Value = response.into_json().expect("json body");
            assert_eq!(body, json!({ "ok": false, "error": "Division by zero." }));
        },
        other => panic!("expected a 400 response, got {other:?}"),
    }

    match ureq::get(&url).call() {
        Err(ureq::Error::Status(status, _)) => assert_eq!(status, 405),
        other => panic!("expected a 405 response, got {other:?}"),
    }

    match ureq::get(&format!("http://{addr}/missing")).call() {
        Err(ureq::Error::Status(status, _)) => assert_eq!(status, 404),
        other => panic!("expected a 404 response, got {other:?}"),
    }

    for _ in 0..2 {
        server.unblock();
    }
}
