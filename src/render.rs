use talentfit::quiz::{ChoiceLabel, ProfileView, QuestionCatalog};

use crate::commands::{ClassifyOutput, RankOutput, ScoreOutput, TransitionOutput};

pub(crate) fn catalog(catalog: &QuestionCatalog) {
    println!("Personality quiz ({} questions)", catalog.len());
    for question in catalog.questions() {
        println!(
            "\n{} [{}] {}",
            question.code,
            question.dimension.label(),
            question.prompt
        );
        for label in [ChoiceLabel::A, ChoiceLabel::B] {
            println!("  {}) {}", label.as_str(), question.choice(label).text);
        }
    }
}

pub(crate) fn profiles(views: &[ProfileView]) {
    for view in views {
        println!("{}. {} ({})", view.numeric_id, view.name, view.id);
        println!("   {}", view.description);
    }
}

pub(crate) fn classification(output: &ClassifyOutput) {
    println!("Profile: {} ({})", output.profile.name, output.profile.id);
    println!("  {}", output.profile.description);
    println!(
        "  Answers: {} A / {} B, matched rule '{}'",
        output.a_count, output.b_count, output.rule
    );
}

pub(crate) fn score(output: &ScoreOutput) {
    println!(
        "Compatibility: {:.2} (weights {} effective {})",
        output.score.total, output.weights.label, output.weights.effective_from
    );
    for component in output.score.components() {
        println!(
            "  - {}: {}/{} matched, ratio {:.2} x weight {:.2} = {:.3}",
            component.kind.label(),
            component.matched,
            component.required,
            component.ratio,
            component.weight,
            component.contribution
        );
    }
}

pub(crate) fn ranking(output: &RankOutput) {
    println!(
        "Ranked {} of {} candidates (weights {})",
        output.ranking.len(),
        output.evaluated,
        output.weights.label
    );
    for entry in &output.ranking {
        println!(
            "{:>3}. {:<20} {:.2}  skills {:.2}  work styles {:.2}  personality {:.2}",
            entry.rank,
            entry.candidate_id,
            entry.score.total,
            entry.score.skill_overlap.ratio,
            entry.score.work_style_overlap.ratio,
            entry.score.personality_bonus.ratio
        );
    }
}

pub(crate) fn transition(output: &TransitionOutput) {
    println!(
        "{} transition {} -> {} is allowed",
        output.entity, output.from, output.to
    );
}
