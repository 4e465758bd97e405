use std::time::Duration;

use anyhow::Result;
use colored::*;
use reqwest::Method;
use serde_json::{json, Value};

use crate::connectivity::config::Config;
use crate::connectivity::fixtures::VirtualTestData;
use crate::connectivity::probe::{Probe, ProbeOutcome, Prober};
use crate::connectivity::report::RunSummary;

const RULE: &str = "========================================";

/// Runs the fixed probe sequence and returns the accumulated summary.
///
/// The run aborts after the first phase when the backend health check does
/// not come back with a 200; every other failed probe is recorded and the
/// sequence keeps going.
pub fn run(config: &Config) -> Result<RunSummary> {
    let prober = Prober::new(config.timeout, config.verbose)?;
    let mut summary = RunSummary::new();
    let data = VirtualTestData::generate();

    println!();
    println!("{}", RULE.cyan());
    println!("{}", "AgriVerse connectivity test".cyan());
    println!("{}", RULE.cyan());
    println!();
    println!("{}", format!("Backend:  {}", config.backend_url).cyan());
    println!("{}", format!("Frontend: {}", config.frontend_url).cyan());
    println!();

    if !check_service_availability(&prober, &mut summary, config) {
        return Ok(summary);
    }

    let token = run_auth_phase(&prober, &mut summary, config, &data);
    run_farmer_phase(&prober, &mut summary, config, &data, token.as_deref())?;
    run_buyer_phase(&prober, &mut summary, config, token.as_deref());
    run_bank_phase(&prober, &mut summary, config, token.as_deref());

    Ok(summary)
}

fn phase_banner(title: &str) {
    println!("{}", RULE.yellow());
    println!("{}", title.yellow());
    println!("{}", RULE.yellow());
    println!();
}

/// Phase 1: service availability.
///
/// Returns false when the backend is down, which is the only condition
/// that aborts the whole run. An unreachable frontend is only noted.
fn check_service_availability(prober: &Prober, summary: &mut RunSummary, config: &Config) -> bool {
    phase_banner("1. Service availability");

    println!("{}", "Checking backend service...".cyan());
    let backend = prober.probe(
        summary,
        Probe {
            name: "Backend health check".to_string(),
            url: format!("{}/api/auth/health", config.backend_url),
            expected_status: vec![200],
            ..Probe::default()
        },
    );

    if !backend.success {
        println!(
            "{}",
            "Backend service is unreachable, make sure it is running".red()
        );
        println!(
            "{}",
            "Start command: cd backend && mvn spring-boot:run".yellow()
        );
        return false;
    }

    println!("{}", "Checking frontend service...".cyan());
    let frontend = prober.probe(
        summary,
        Probe {
            name: "Frontend health check".to_string(),
            url: config.frontend_url.clone(),
            expected_status: vec![200],
            timeout: Some(Duration::from_secs(5)),
            ..Probe::default()
        },
    );
    if !frontend.success {
        println!(
            "{}",
            "Frontend is unreachable, continuing with the API tests".yellow()
        );
    }
    println!();

    true
}

/// Phase 2: auth APIs. Returns the bearer token when login succeeded and
/// the body could be parsed.
fn run_auth_phase(
    prober: &Prober,
    summary: &mut RunSummary,
    config: &Config,
    data: &VirtualTestData,
) -> Option<String> {
    phase_banner("2. Auth API");

    prober.probe(
        summary,
        Probe {
            name: "Auth service health check".to_string(),
            url: format!("{}/api/auth/health", config.backend_url),
            expected_status: vec![200],
            ..Probe::default()
        },
    );

    prober.probe(
        summary,
        Probe {
            name: "Send verification code".to_string(),
            url: format!("{}/api/auth/send-code", config.backend_url),
            method: Method::POST,
            body: Some(json!({
                "phone": data.user.phone,
                "type": "register",
                "role": "farmer",
            })),
            expected_status: vec![200, 400, 429],
            ..Probe::default()
        },
    );

    prober.probe(
        summary,
        Probe {
            name: "Check phone number".to_string(),
            url: format!(
                "{}/api/auth/check-phone?phone={}&role=farmer",
                config.backend_url, data.user.phone
            ),
            expected_status: vec![200],
            ..Probe::default()
        },
    );

    let login = prober.probe(
        summary,
        Probe {
            name: "User login".to_string(),
            url: format!("{}/api/auth/login", config.backend_url),
            method: Method::POST,
            body: Some(json!({
                "phone": data.user.phone,
                "password": data.user.password,
                "role": "farmer",
            })),
            expected_status: vec![200, 401],
            ..Probe::default()
        },
    );

    let token = extract_token(&login);
    if let Some(token) = &token {
        let preview: String = token.chars().take(20).collect();
        println!("{}", format!("  Token obtained: {}...", preview).green());
    }
    println!();

    token
}

/// Pulls `data.token` out of a successful login response body.
///
/// Any parse failure falls back to `None`: the remaining probes then go
/// out unauthenticated and 401/403 answers stay allowed outcomes, so a
/// rejected login never aborts the run.
pub fn extract_token(login: &ProbeOutcome) -> Option<String> {
    if !login.success || login.status_code != 200 {
        return None;
    }
    let body: Value = serde_json::from_str(&login.content).ok()?;
    body.get("data")?.get("token")?.as_str().map(str::to_owned)
}

/// Builds the Authorization header set for the role-specific phases.
pub fn bearer_headers(token: Option<&str>) -> Vec<(String, String)> {
    match token {
        Some(token) => vec![("Authorization".to_string(), format!("Bearer {}", token))],
        None => Vec::new(),
    }
}

/// Phase 3: farmer APIs.
fn run_farmer_phase(
    prober: &Prober,
    summary: &mut RunSummary,
    config: &Config,
    data: &VirtualTestData,
    token: Option<&str>,
) -> Result<()> {
    phase_banner("3. Farmer API");
    let headers = bearer_headers(token);

    prober.probe(
        summary,
        Probe {
            name: "Farmer product service health check".to_string(),
            url: format!("{}/api/farmer/products/health", config.backend_url),
            headers: headers.clone(),
            expected_status: vec![200],
            ..Probe::default()
        },
    );

    prober.probe(
        summary,
        Probe {
            name: "List farmer products".to_string(),
            url: format!(
                "{}/api/farmer/products/list?page=1&pageSize=20",
                config.backend_url
            ),
            headers: headers.clone(),
            expected_status: vec![200, 401],
            ..Probe::default()
        },
    );

    prober.probe(
        summary,
        Probe {
            name: "Create farmer product".to_string(),
            url: format!("{}/api/farmer/products/create", config.backend_url),
            method: Method::POST,
            headers: headers.clone(),
            body: Some(serde_json::to_value(&data.product)?),
            expected_status: vec![200, 400, 401],
            ..Probe::default()
        },
    );

    prober.probe(
        summary,
        Probe {
            name: "Farmer product dashboard".to_string(),
            url: format!("{}/api/farmer/products/dashboard", config.backend_url),
            headers,
            expected_status: vec![200, 401],
            ..Probe::default()
        },
    );
    println!();

    Ok(())
}

/// Phase 4: buyer APIs.
fn run_buyer_phase(
    prober: &Prober,
    summary: &mut RunSummary,
    config: &Config,
    token: Option<&str>,
) {
    phase_banner("4. Buyer API");
    let headers = bearer_headers(token);

    prober.probe(
        summary,
        Probe {
            name: "Buyer product service health check".to_string(),
            url: format!("{}/api/buyer/products/health", config.backend_url),
            headers: headers.clone(),
            expected_status: vec![200],
            ..Probe::default()
        },
    );

    prober.probe(
        summary,
        Probe {
            name: "List buyer products".to_string(),
            url: format!(
                "{}/api/buyer/products/list?page=1&pageSize=20",
                config.backend_url
            ),
            headers: headers.clone(),
            expected_status: vec![200, 401],
            ..Probe::default()
        },
    );

    prober.probe(
        summary,
        Probe {
            name: "Fetch shopping cart".to_string(),
            url: format!("{}/api/buyer/cart", config.backend_url),
            headers,
            expected_status: vec![200, 401],
            ..Probe::default()
        },
    );
    println!();
}

/// Phase 5: bank APIs.
fn run_bank_phase(
    prober: &Prober,
    summary: &mut RunSummary,
    config: &Config,
    token: Option<&str>,
) {
    phase_banner("5. Bank API");

    prober.probe(
        summary,
        Probe {
            name: "List loan products".to_string(),
            url: format!(
                "{}/api/bank/loan/products?page=1&pageSize=20",
                config.backend_url
            ),
            headers: bearer_headers(token),
            expected_status: vec![200, 401, 403],
            ..Probe::default()
        },
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(success: bool, status_code: u16, content: &str) -> ProbeOutcome {
        ProbeOutcome {
            success,
            status_code,
            response_time: "5ms".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn token_is_extracted_from_a_successful_login() {
        let login = outcome(true, 200, r#"{"data":{"token":"abc123"}}"#);
        assert_eq!(extract_token(&login), Some("abc123".to_string()));
    }

    #[test]
    fn rejected_login_yields_no_token() {
        // 401 is an allowed outcome for the login probe, so success is true
        // while the status still rules the token out.
        let login = outcome(true, 401, r#"{"message":"bad credentials"}"#);
        assert_eq!(extract_token(&login), None);
    }

    #[test]
    fn malformed_login_body_yields_no_token() {
        assert_eq!(extract_token(&outcome(true, 200, "not json")), None);
        assert_eq!(extract_token(&outcome(true, 200, r#"{"data":{}}"#)), None);
        assert_eq!(extract_token(&outcome(true, 200, "")), None);
    }

    #[test]
    fn bearer_headers_follow_the_token() {
        assert!(bearer_headers(None).is_empty());
        let headers = bearer_headers(Some("abc123"));
        assert_eq!(
            headers,
            vec![("Authorization".to_string(), "Bearer abc123".to_string())]
        );
    }
}
