//! Tagging state machine tests
//!
//! Drives `update` directly: mode evaluation, commits, suggestions, palette.

mod common;

use common::{bug_and_feature, suggestion_titles, test_model, token, token_titles, tokens_changed};

use tokens_input::messages::Msg;
use tokens_input::model::TaggingState;
use tokens_input::palette::PaletteSelection;
use tokens_input::update::update;
use tokens_input::{Cmd, Color, TokenSet};

// ========================================================================
// Mode Evaluation
// ========================================================================

#[test]
fn test_initial_mode_lists_all_available() {
    let model = test_model(bug_and_feature());
    assert_eq!(model.state(), TaggingState::Initial);
    assert_eq!(suggestion_titles(&model), vec!["feature", "bug"]);
}

#[test]
fn test_unmatched_text_is_new_token() {
    for text in ["urgent", "bu", "bugs", "Bug", " feat ure "] {
        let mut model = test_model(bug_and_feature());
        update(&mut model, Msg::TextChanged(text.to_string()));
        assert_eq!(model.state(), TaggingState::NewToken, "text {:?}", text);
        assert_eq!(suggestion_titles(&model), vec!["feature", "bug"]);
    }
}

#[test]
fn test_unmatched_text_excludes_committed_from_suggestions() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::SelectSuggestion(token("bug", "#ff0000")));
    update(&mut model, Msg::TextChanged("urgent".to_string()));
    assert_eq!(model.state(), TaggingState::NewToken);
    assert_eq!(suggestion_titles(&model), vec!["feature"]);
}

#[test]
fn test_exact_match_is_existing_token() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::TextChanged("  feature ".to_string()));
    assert_eq!(model.state(), TaggingState::ExistingToken);
    assert_eq!(suggestion_titles(&model), vec!["feature"]);
}

#[test]
fn test_empty_text_returns_to_initial_from_any_state() {
    let mut model = test_model(bug_and_feature());

    update(&mut model, Msg::TextChanged("bug".to_string()));
    assert_eq!(model.state(), TaggingState::ExistingToken);
    update(&mut model, Msg::TextChanged(String::new()));
    assert_eq!(model.state(), TaggingState::Initial);

    update(&mut model, Msg::TextChanged("new one".to_string()));
    assert_eq!(model.state(), TaggingState::NewToken);
    update(&mut model, Msg::TextChanged("   ".to_string()));
    assert_eq!(model.state(), TaggingState::Initial);
}

#[test]
fn test_action_label_tracks_trimmed_text() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::TextChanged(" urgent  ".to_string()));
    assert_eq!(model.mode.action_label, "Create new token: `urgent`");
}

#[test]
fn test_mode_notification_only_on_change() {
    let mut model = test_model(bug_and_feature());

    let cmd = update(&mut model, Msg::TextChanged("urg".to_string()));
    assert!(matches!(
        cmd,
        Some(Cmd::Batch(ref cmds)) if matches!(cmds[0], Cmd::ModeChanged { state: TaggingState::NewToken, .. })
    ));

    // Same trimmed text, same suggestions: nothing to publish
    let cmd = update(&mut model, Msg::TextChanged("urg ".to_string()));
    assert_eq!(cmd, None);

    // The label differs, so the host hears about it
    let cmd = update(&mut model, Msg::TextChanged("urge".to_string()));
    assert!(cmd.is_some());
}

#[test]
fn test_typing_matches_text_changed() {
    let mut typed = test_model(bug_and_feature());
    for ch in "bug".chars() {
        update(&mut typed, Msg::InsertChar(ch));
    }

    let mut replaced = test_model(bug_and_feature());
    update(&mut replaced, Msg::TextChanged("bug".to_string()));

    assert_eq!(typed.mode, replaced.mode);
    assert_eq!(typed.state(), TaggingState::ExistingToken);
}

#[test]
fn test_tab_is_swallowed() {
    let mut model = test_model(bug_and_feature());
    assert_eq!(update(&mut model, Msg::InsertChar('\t')), None);
    assert_eq!(model.current_text(), "");
}

// ========================================================================
// Commit
// ========================================================================

#[test]
fn test_commit_existing_token_scenario() {
    let mut model = test_model(bug_and_feature());

    update(&mut model, Msg::TextChanged("bug".to_string()));
    assert_eq!(model.state(), TaggingState::ExistingToken);
    assert_eq!(suggestion_titles(&model), vec!["bug"]);

    let cmd = update(&mut model, Msg::Commit);

    let tokens = model.tokens();
    assert_eq!(token_titles(&tokens), vec!["bug"]);
    assert_eq!(tokens.get("bug").unwrap().color_hex(), "#ff0000");

    let published = tokens_changed(&cmd);
    assert_eq!(published.len(), 1);
    assert_eq!(token_titles(&published[0]), vec!["bug"]);

    assert_eq!(model.current_text(), "");
    assert_eq!(model.state(), TaggingState::Initial);
    assert_eq!(suggestion_titles(&model), vec!["feature"]);
}

#[test]
fn test_commit_new_token_uses_selected_color() {
    let mut model = test_model(bug_and_feature());

    update(&mut model, Msg::SelectColor(2));
    update(&mut model, Msg::TextChanged("urgent".to_string()));
    assert_eq!(model.state(), TaggingState::NewToken);
    assert_eq!(model.mode.action_label, "Create new token: `urgent`");

    update(&mut model, Msg::Commit);

    let tokens = model.tokens();
    let urgent = tokens.get("urgent").unwrap();
    assert_eq!(urgent.color(), model.palette.colors()[2]);
    assert_eq!(urgent.color_hex(), "#c67c00");
}

#[test]
fn test_enter_commits() {
    let mut model = test_model(bug_and_feature());
    for ch in "ship it\n".chars() {
        update(&mut model, Msg::InsertChar(ch));
    }
    assert_eq!(token_titles(&model.tokens()), vec!["ship it"]);
    assert_eq!(model.current_text(), "");
}

#[test]
fn test_commit_on_empty_text_is_noop() {
    let mut model = test_model(bug_and_feature());
    assert_eq!(update(&mut model, Msg::Commit), None);

    update(&mut model, Msg::TextChanged("   ".to_string()));
    assert_eq!(update(&mut model, Msg::Commit), None);
    assert!(model.tokens().is_empty());
}

#[test]
fn test_commit_twice_inserts_once() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::TextChanged("once".to_string()));

    let first = update(&mut model, Msg::Commit);
    let second = update(&mut model, Msg::Commit);

    assert_eq!(tokens_changed(&first).len(), 1);
    assert_eq!(second, None);
    assert_eq!(model.tokens().len(), 1);
}

#[test]
fn test_commit_of_committed_title_only_clears_text() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::SelectSuggestion(token("bug", "#ff0000")));

    update(&mut model, Msg::TextChanged("bug".to_string()));
    assert_eq!(model.state(), TaggingState::NewToken);

    let cmd = update(&mut model, Msg::Commit);
    assert!(tokens_changed(&cmd).is_empty());
    assert_eq!(model.tokens().len(), 1);
    assert_eq!(model.current_text(), "");
    assert_eq!(model.state(), TaggingState::Initial);
}

// ========================================================================
// Suggestions
// ========================================================================

#[test]
fn test_select_suggestion_while_browsing() {
    let mut model = test_model(bug_and_feature());

    let cmd = update(&mut model, Msg::SelectSuggestion(token("feature", "#0000ff")));

    assert_eq!(token_titles(&tokens_changed(&cmd)[0]), vec!["feature"]);
    assert_eq!(model.state(), TaggingState::Initial);
    assert_eq!(suggestion_titles(&model), vec!["bug"]);
}

#[test]
fn test_select_suggestion_discards_other_text() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::TextChanged("half typed".to_string()));

    update(&mut model, Msg::SelectSuggestion(token("bug", "#ff0000")));

    assert_eq!(model.current_text(), "");
    assert_eq!(token_titles(&model.tokens()), vec!["bug"]);
}

#[test]
fn test_select_existing_suggestion_keeps_its_color() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::SelectColor(5));
    update(&mut model, Msg::TextChanged("feature".to_string()));

    update(&mut model, Msg::SelectSuggestion(token("feature", "#0000ff")));

    assert_eq!(
        model.tokens().get("feature").unwrap().color_hex(),
        "#0000ff"
    );
}

#[test]
fn test_duplicate_insert_is_silent() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::SelectSuggestion(token("bug", "#ff0000")));

    let cmd = update(&mut model, Msg::SelectSuggestion(token("bug", "#00ff00")));

    assert_eq!(cmd, None);
    assert_eq!(model.tokens().len(), 1);
    assert_eq!(model.tokens().get("bug").unwrap().color_hex(), "#ff0000");
}

#[test]
fn test_inserted_token_leaves_suggestions() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::SelectSuggestion(token("bug", "#ff0000")));
    update(&mut model, Msg::TextChanged(String::new()));
    assert!(!suggestion_titles(&model).contains(&"bug".to_string()));
}

#[test]
fn test_refresh_picks_up_new_available_tokens() {
    let mut model = test_model(bug_and_feature());
    model.available.insert(token("docs", "#009624"));

    let cmd = update(&mut model, Msg::Refresh);

    assert!(cmd.is_some());
    assert_eq!(suggestion_titles(&model), vec!["feature", "docs", "bug"]);
}

// ========================================================================
// Removal
// ========================================================================

#[test]
fn test_backspace_removes_trailing_chip() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::SelectSuggestion(token("bug", "#ff0000")));
    update(&mut model, Msg::InsertChar('x'));

    let cmd = update(&mut model, Msg::DeleteBackward);
    assert!(tokens_changed(&cmd).is_empty());
    assert_eq!(model.tokens().len(), 1);

    let cmd = update(&mut model, Msg::DeleteBackward);
    assert_eq!(tokens_changed(&cmd), vec![TokenSet::new()]);
    assert!(model.tokens().is_empty());
    assert_eq!(suggestion_titles(&model), vec!["feature", "bug"]);

    assert_eq!(update(&mut model, Msg::DeleteBackward), None);
}

#[test]
fn test_remove_token_by_title() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::SelectSuggestion(token("bug", "#ff0000")));
    update(&mut model, Msg::SelectSuggestion(token("feature", "#0000ff")));

    let cmd = update(&mut model, Msg::RemoveToken("bug".to_string()));
    assert_eq!(token_titles(&tokens_changed(&cmd)[0]), vec!["feature"]);

    assert_eq!(update(&mut model, Msg::RemoveToken("bug".to_string())), None);
}

// ========================================================================
// Palette
// ========================================================================

#[test]
fn test_select_color_out_of_range_is_silent() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::SelectColor(4));

    assert_eq!(update(&mut model, Msg::SelectColor(99)), None);
    assert_eq!(model.palette.selected_index(), 4);
}

#[test]
fn test_select_color_reports_previous() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::SelectColor(1));
    let cmd = update(&mut model, Msg::SelectColor(3));
    assert_eq!(
        cmd,
        Some(Cmd::PaletteSelectionChanged(PaletteSelection {
            previous: 1,
            current: 3
        }))
    );
}

#[test]
fn test_request_new_from_color() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::TextChanged("custom".to_string()));

    let color = Color::rgb(0x12, 0x34, 0x56);
    let cmd = update(&mut model, Msg::RequestNewFromColor(color));

    assert_eq!(model.tokens().get("custom").unwrap().color(), color);
    let flat = cmd.unwrap().flatten();
    assert_eq!(flat[0], Cmd::PaletteChanged(model.palette.colors().to_vec()));
    assert_eq!(
        flat[1],
        Cmd::PaletteSelectionChanged(PaletteSelection {
            previous: 0,
            current: 10
        })
    );
}

#[test]
fn test_request_new_from_palette_color_keeps_palette() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::TextChanged("swatch".to_string()));

    let color = model.palette.colors()[6];
    update(&mut model, Msg::RequestNewFromColor(color));

    assert_eq!(model.palette.len(), 10);
    assert_eq!(model.palette.selected_index(), 6);
    assert_eq!(model.tokens().get("swatch").unwrap().color_hex(), "#2962ff");
}

#[test]
fn test_set_colors_empty_keeps_palette() {
    let mut model = test_model(bug_and_feature());
    assert_eq!(update(&mut model, Msg::SetColors(Vec::new())), None);
    assert_eq!(model.palette.len(), 10);

    let cmd = update(
        &mut model,
        Msg::SetColors(vec![Color::rgb(1, 1, 1), Color::rgb(2, 2, 2)]),
    );
    assert_eq!(
        cmd,
        Some(Cmd::Batch(vec![
            Cmd::PaletteChanged(vec![Color::rgb(1, 1, 1), Color::rgb(2, 2, 2)]),
            Cmd::ContentSizeChanged,
        ]))
    );
    assert_eq!(model.palette.len(), 2);
}

#[test]
fn test_set_colors_reports_clamped_selection() {
    let mut model = test_model(bug_and_feature());
    update(&mut model, Msg::SelectColor(7));

    let cmd = update(&mut model, Msg::SetColors(vec![Color::rgb(9, 9, 9)]));

    let flat = cmd.unwrap().flatten();
    assert_eq!(
        flat,
        vec![
            Cmd::PaletteChanged(vec![Color::rgb(9, 9, 9)]),
            Cmd::PaletteSelectionChanged(PaletteSelection {
                previous: 7,
                current: 0
            }),
            Cmd::ContentSizeChanged,
        ]
    );
    assert_eq!(model.palette.selected_index(), 0);
}
