use crate::helpers::{flash, get_random_name, location, TestContext};
use checkin_service::utils::FlashKind;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn self_checkin_marks_member_present_with_location(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let nome = get_random_name();
    let member = app.add_member(&nome, "Louvor").await;

    let response = app.checkin_obreiro(&nome, "Louvor").await;

    assert_eq!(location(&response), "/");
    let notice = flash(&response);
    assert_eq!(notice.kind, FlashKind::Success);
    assert_eq!(notice.message, "Check-in realizado com sucesso! Deus te abençoe!");

    let member = app.member_store.get_member(member.id).await.unwrap();
    assert!(member.presente);
    assert!(member.data_checkin.is_some());
    let location = member.location.expect("coordinates were sent");
    assert!((location.latitude + 23.55052).abs() < 1e-9);
}

#[test_context(TestContext)]
#[tokio::test]
async fn self_checkin_without_match_leaves_roster_unchanged(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let before = app.member_store.list_members().await.unwrap();

    let response = app.checkin_obreiro(&get_random_name(), "Louvor").await;

    assert_eq!(location(&response), "/");
    let notice = flash(&response);
    assert_eq!(notice.kind, FlashKind::Warning);
    assert_eq!(notice.message, "Obreiro não encontrado. Verifique nome e grupo.");

    let after = app.member_store.list_members().await.unwrap();
    assert_eq!(before, after);
}

#[test_context(TestContext)]
#[tokio::test]
async fn self_checkin_requires_the_group_to_match(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let nome = get_random_name();
    let member = app.add_member(&nome, "Louvor").await;

    let response = app.checkin_obreiro(&nome, "Recepção").await;

    assert_eq!(flash(&response).kind, FlashKind::Warning);
    assert!(!app.member_store.get_member(member.id).await.unwrap().presente);
}

#[test_context(TestContext)]
#[tokio::test]
async fn leader_checkin_sets_and_clears_presence(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    let member = app.add_member(&get_random_name(), "Intercessão").await;

    let response = app.checkin_lider(member.id, true).await;
    assert_eq!(location(&response), "/painel_lider");
    assert_eq!(flash(&response).kind, FlashKind::Success);

    let present = app.member_store.get_member(member.id).await.unwrap();
    assert!(present.presente);
    assert!(present.data_checkin.is_some());
    assert!(present.location.is_none());

    app.checkin_lider(member.id, false).await;

    let absent = app.member_store.get_member(member.id).await.unwrap();
    assert!(!absent.presente);
    assert!(absent.data_checkin.is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn leader_checkin_keeps_self_checkin_coordinates(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let nome = get_random_name();
    let member = app.add_member(&nome, "Louvor").await;
    app.checkin_obreiro(&nome, "Louvor").await;
    app.login_as_seed_leader().await;

    app.checkin_lider(member.id, false).await;

    let member = app.member_store.get_member(member.id).await.unwrap();
    assert!(!member.presente);
    assert!(member.location.is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn leader_checkin_on_missing_member_is_not_found(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;

    let response = app.checkin_lider(999_999, true).await;

    assert_eq!(location(&response), "/painel_lider");
    let notice = flash(&response);
    assert_eq!(notice.kind, FlashKind::Warning);
    assert_eq!(notice.message, "Obreiro não encontrado.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn leader_checkin_requires_session(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let member = app.add_member(&get_random_name(), "Louvor").await;

    let response = app.checkin_lider(member.id, true).await;

    assert_eq!(location(&response), "/login_lider");
    assert!(!app.member_store.get_member(member.id).await.unwrap().presente);
}

#[test_context(TestContext)]
#[tokio::test]
async fn malformed_member_id_redirects_with_notice(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;

    let response = app
        .post_form("/checkin_lider", &[("membro_id", "abc"), ("presente", "on")])
        .await;

    assert_eq!(location(&response), "/painel_lider");
    let notice = flash(&response);
    assert_eq!(notice.kind, FlashKind::Warning);
    assert_eq!(notice.message, "Dados do formulário inválidos.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn self_checkin_without_group_redirects_with_notice(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.post_form("/checkin_obreiro", &[("nome", "Ana")]).await;

    assert_eq!(location(&response), "/");
    assert_eq!(flash(&response).kind, FlashKind::Warning);
}
