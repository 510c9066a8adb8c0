use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("talentfit-cli-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn talentfit(args: &[&str]) -> Output {
    talentfit_with_env(args, &[])
}

fn talentfit_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_talentfit"));
    command
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("APP_SKILL_WEIGHT")
        .env_remove("APP_WORK_STYLE_WEIGHT")
        .env_remove("APP_PERSONALITY_WEIGHT")
        .env_remove("APP_WEIGHTS_EFFECTIVE_FROM")
        .env_remove("APP_ALLOW_UNPUBLISH")
        .env("APP_LOG_LEVEL", "warn");
    for (name, value) in vars {
        command.env(name, value);
    }
    command.output().expect("run talentfit binary")
}

fn stdout_text(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_decisive_answers(name: &str) -> PathBuf {
    let answers = scratch_dir(name).join("answers.json");
    fs::write(
        &answers,
        r#"[
            {"question_code": "Q1", "choice_label": "A"},
            {"question_code": "Q2", "choice_label": "A"},
            {"question_code": "Q3", "choice_label": "A"},
            {"question_code": "Q4", "choice_label": "A"},
            {"question_code": "Q5", "choice_label": "B"},
            {"question_code": "Q6", "choice_label": "B"}
        ]"#,
    )
    .expect("write answers");
    answers
}

fn write_score_inputs(name: &str) -> (PathBuf, PathBuf) {
    let dir = scratch_dir(name);
    let seeker = dir.join("seeker.json");
    let job = dir.join("job.json");
    fs::write(
        &seeker,
        r#"{"skills": ["rust", "aws", "python"], "work_styles": ["remote", "office"]}"#,
    )
    .expect("write seeker");
    fs::write(
        &job,
        r#"{
            "required_skills": ["rust", "postgres", "aws", "terraform"],
            "required_work_styles": ["remote", "async"],
            "preferred_profiles": ["independent_solver"]
        }"#,
    )
    .expect("write job");
    (seeker, job)
}

fn write_rank_inputs(name: &str) -> (PathBuf, PathBuf) {
    let dir = scratch_dir(name);
    let job = dir.join("job.json");
    let roster = dir.join("roster.csv");
    fs::write(
        &job,
        r#"{"required_skills": ["rust", "sql"], "required_work_styles": ["remote"]}"#,
    )
    .expect("write job");
    fs::write(
        &roster,
        "candidate_id,skills,work_styles,profile\n\
         c-low,sql,,\n\
         c-high,rust;sql,remote,steady_specialist\n\
         c-mid,rust,remote,\n",
    )
    .expect("write roster");
    (job, roster)
}

fn path(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn classify_reports_decisive_profile() {
    let answers = write_decisive_answers("classify");

    let output = talentfit(&["classify", "--answers", path(&answers)]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let body = stdout_json(&output);
    assert_eq!(body["profile"]["id"], "action_oriented");
    assert_eq!(body["profile"]["numeric_id"], 1);
    assert_eq!(body["a_count"], 4);
    assert_eq!(body["b_count"], 2);
}

#[test]
fn incomplete_quiz_exits_with_rejection_code() {
    let dir = scratch_dir("incomplete");
    let answers = dir.join("answers.json");
    fs::write(&answers, r#"[{"question_code": "Q1", "choice_label": "A"}]"#)
        .expect("write answers");

    let output = talentfit(&["classify", "--answers", answers.to_str().expect("utf8 path")]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("application error: quiz rejected"), "stderr: {stderr}");
    assert!(stderr.contains("Q6"), "stderr: {stderr}");
}

#[test]
fn score_prints_component_breakdown() {
    let (seeker, job) = write_score_inputs("score");

    let output = talentfit(&["score", "--seeker", path(&seeker), "--job", path(&job)]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let body = stdout_json(&output);
    let total = body["score"]["total"].as_f64().expect("numeric total");
    assert!((total - 0.40).abs() < 1e-9, "total was {total}");
    assert_eq!(body["weights"]["version"], 1);
    assert_eq!(body["score"]["skill_overlap"]["matched"], 2);
}

#[test]
fn both_inputs_from_stdin_is_a_usage_error() {
    let output = talentfit(&["score", "--seeker", "-", "--job", "-"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage error"));
}

#[test]
fn rank_orders_roster_best_first() {
    let (job, roster) = write_rank_inputs("rank");

    let output = talentfit(&[
        "rank",
        "--job",
        path(&job),
        "--candidates",
        path(&roster),
        "--limit",
        "2",
    ]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let body = stdout_json(&output);
    assert_eq!(body["evaluated"], 3);
    let ranking = body["ranking"].as_array().expect("ranking array");
    let ids: Vec<&str> = ranking
        .iter()
        .map(|entry| entry["candidate_id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["c-high", "c-mid"]);
    assert_eq!(ranking[0]["rank"], 1);
}

#[test]
fn transition_accepts_and_rejects() {
    let allowed = talentfit(&[
        "transition",
        "--entity",
        "application",
        "--from",
        "APPLIED",
        "--to",
        "IN_REVIEW",
    ]);
    assert!(allowed.status.success());
    assert_eq!(stdout_json(&allowed)["to"], "IN_REVIEW");

    let rejected = talentfit(&[
        "transition",
        "--entity",
        "job-post",
        "--from",
        "CLOSED",
        "--to",
        "PUBLISHED",
    ]);
    assert_eq!(rejected.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&rejected.stderr).contains("transition rejected"));
}

#[test]
fn profiles_text_output_lists_every_profile() {
    let output = talentfit(&["profiles", "--format", "text"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in [
        "action_oriented",
        "steady_specialist",
        "empathetic_coordinator",
        "independent_solver",
        "flexible_all_rounder",
    ] {
        assert!(stdout.contains(id), "missing {id} in {stdout}");
    }
}

#[test]
fn transition_echoes_canonical_state_labels() {
    let output = talentfit(&[
        "transition",
        "--entity",
        "application",
        "--from",
        "in-review",
        "--to",
        "hired",
    ]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let body = stdout_json(&output);
    assert_eq!(body["from"], "IN_REVIEW");
    assert_eq!(body["to"], "HIRED");
}

#[test]
fn malformed_weights_only_break_scoring_commands() {
    let bad_weight = [("APP_SKILL_WEIGHT", "abc")];

    let catalog = talentfit_with_env(&["catalog"], &bad_weight);
    assert!(catalog.status.success(), "stderr: {}", String::from_utf8_lossy(&catalog.stderr));

    let profiles = talentfit_with_env(&["profiles"], &bad_weight);
    assert!(profiles.status.success());

    let (seeker, job) = write_score_inputs("bad-weight");
    let score = talentfit_with_env(
        &["score", "--seeker", path(&seeker), "--job", path(&job)],
        &bad_weight,
    );
    assert_eq!(score.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&score.stderr).contains("APP_SKILL_WEIGHT"));
}

#[test]
fn catalog_text_output_lists_questions_and_choices() {
    let stdout = stdout_text(&talentfit(&["catalog", "--format", "text"]));

    assert!(stdout.contains("Personality quiz (6 questions)"), "{stdout}");
    for code in ["Q1", "Q2", "Q3", "Q4", "Q5", "Q6"] {
        assert!(stdout.contains(code), "missing {code} in {stdout}");
    }
    assert!(stdout.contains("  A) "));
    assert!(stdout.contains("  B) "));
}

#[test]
fn classify_text_output_names_profile_and_rule() {
    let answers = write_decisive_answers("classify-text");

    let stdout = stdout_text(&talentfit(&[
        "classify",
        "--answers",
        path(&answers),
        "--format",
        "text",
    ]));

    assert!(stdout.contains("(action_oriented)"), "{stdout}");
    assert!(stdout.contains("Answers: 4 A / 2 B"), "{stdout}");
}

#[test]
fn score_text_output_breaks_down_components() {
    let (seeker, job) = write_score_inputs("score-text");

    let stdout = stdout_text(&talentfit(&[
        "score",
        "--seeker",
        path(&seeker),
        "--job",
        path(&job),
        "--format",
        "text",
    ]));

    assert!(stdout.contains("Compatibility: 0.40 (weights v1"), "{stdout}");
    assert!(stdout.contains("skill overlap: 2/4 matched"), "{stdout}");
    assert!(stdout.contains("work style overlap: 1/2 matched"), "{stdout}");
    assert!(stdout.contains("personality bonus: 0/1 matched"), "{stdout}");
}

#[test]
fn rank_text_output_lists_candidates_in_order() {
    let (job, roster) = write_rank_inputs("rank-text");

    let stdout = stdout_text(&talentfit(&[
        "rank",
        "--job",
        path(&job),
        "--candidates",
        path(&roster),
        "--format",
        "text",
    ]));

    assert!(stdout.contains("Ranked 3 of 3 candidates (weights v1)"), "{stdout}");
    let high = stdout.find("c-high").expect("c-high listed");
    let mid = stdout.find("c-mid").expect("c-mid listed");
    let low = stdout.find("c-low").expect("c-low listed");
    assert!(high < mid && mid < low, "{stdout}");
}

#[test]
fn transition_text_output_uses_canonical_labels() {
    let stdout = stdout_text(&talentfit(&[
        "transition",
        "--entity",
        "job-post",
        "--from",
        "draft",
        "--to",
        "published",
        "--format",
        "text",
    ]));

    assert_eq!(stdout.trim(), "job post transition DRAFT -> PUBLISHED is allowed");
}
