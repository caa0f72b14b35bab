use deploy_plan_core::report::{render_text, SEPARATOR_WIDTH};
use deploy_plan_core::{DeploymentPlan, FunctionDescriptor};

const BUILTIN_SUMMARY: &str = include_str!("fixtures/builtin_summary.txt");

fn small_plan() -> DeploymentPlan {
    DeploymentPlan::new(
        "X",
        vec![FunctionDescriptor::new("a", "p/a"), FunctionDescriptor::new("b", "p/b")],
    )
}

/// Split a rendered report at the closing separator into (functions, instructions).
fn split_at_closing_rule(text: &str) -> (&str, &str) {
    let rule = format!("{}\n", "=".repeat(SEPARATOR_WIDTH));
    let idx = text.rfind(&rule).expect("closing separator");
    text.split_at(idx)
}

#[test]
fn builtin_plan_matches_golden_output() {
    assert_eq!(render_text(&DeploymentPlan::builtin()), BUILTIN_SUMMARY);
}

#[test]
fn rendering_is_deterministic() {
    let plan = DeploymentPlan::builtin();
    let first = render_text(&plan);
    for _ in 0..5 {
        assert_eq!(render_text(&plan), first);
    }
}

#[test]
fn header_is_title_then_fixed_width_rule() {
    let text = render_text(&small_plan());
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Edge Function Deployment Summary:"));
    assert_eq!(lines.next(), Some("=".repeat(50).as_str()));
    assert_eq!(lines.next(), Some("Project ID: X"));
    assert_eq!(lines.next(), Some("Functions to deploy: 2"));
    assert_eq!(lines.next(), Some(""));
}

#[test]
fn project_id_appears_in_header_and_url_only() {
    let text = render_text(&DeploymentPlan::builtin());
    let id = "xrqobmncpllhkjjorjul";
    assert_eq!(text.matches(id).count(), 2);
    assert_eq!(text.lines().filter(|l| *l == format!("Project ID: {id}")).count(), 1);
    assert_eq!(
        text.lines()
            .filter(|l| l.contains(&format!("https://supabase.com/dashboard/project/{id}/functions")))
            .count(),
        1
    );
}

#[test]
fn small_plan_lists_blocks_before_and_commands_after_closing_rule() {
    let text = render_text(&small_plan());
    assert!(text.contains("Functions to deploy: 2\n"));

    let (blocks, closing) = split_at_closing_rule(&text);
    let a = blocks.find("Function: a\nPath: p/a\nStatus: Ready for deployment\n\n");
    let b = blocks.find("Function: b\nPath: p/b\nStatus: Ready for deployment\n\n");
    assert!(a.is_some() && b.is_some(), "both blocks should precede the closing section");
    assert!(a < b, "blocks should keep plan order");

    assert!(!closing.contains("Function: "));
    let cmd_a = closing.find("   supabase functions deploy a\n").expect("command for a");
    let cmd_b = closing.find("   supabase functions deploy b\n").expect("command for b");
    assert!(cmd_a < cmd_b);
}

#[test]
fn one_block_and_one_command_per_descriptor() {
    let plan = DeploymentPlan::builtin();
    let text = render_text(&plan);
    let (blocks, closing) = split_at_closing_rule(&text);

    assert_eq!(blocks.matches("Function: ").count(), plan.function_count());
    assert_eq!(blocks.matches("Status: Ready for deployment").count(), plan.function_count());
    assert_eq!(closing.matches("supabase functions deploy ").count(), plan.function_count());

    for func in &plan.functions {
        assert_eq!(blocks.matches(&format!("Function: {}\n", func.name)).count(), 1);
        assert_eq!(blocks.matches(&format!("Path: {}\n", func.path)).count(), 1);
        assert!(closing.contains(&format!("supabase functions deploy {}\n", func.name)));
    }
}

#[test]
fn empty_plan_still_prints_instructions() {
    let text = render_text(&DeploymentPlan::new("EMPTY", vec![]));
    assert!(text.contains("Functions to deploy: 0\n"));
    assert!(!text.contains("Function: "));
    assert!(text.ends_with("OR use Supabase CLI (after proper auth setup):\n"));
}
