use crate::helpers::{flash, get_random_name, location, TestContext};
use checkin_service::utils::FlashKind;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn register_member_with_defaults(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    let nome = get_random_name();

    let response = app
        .post_form("/cadastrar_obreiro", &[("nome", nome.as_str())])
        .await;

    assert_eq!(location(&response), "/painel_lider");
    assert_eq!(flash(&response).message, "Obreiro cadastrado com sucesso!");

    let members = app.member_store.list_members().await.unwrap();
    let member = members
        .iter()
        .find(|m| m.nome == nome)
        .expect("member was registered");
    assert_eq!(member.grupo, "");
    assert_eq!(member.telefone, "");
    assert_eq!(member.email, "");
    assert!(!member.presente);
    assert!(member.data_checkin.is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn register_member_requires_name(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    let before = app.member_store.count_members().await.unwrap();

    let response = app
        .post_form("/cadastrar_obreiro", &[("nome", "   "), ("grupo", "Louvor")])
        .await;

    assert_eq!(location(&response), "/painel_lider");
    assert_eq!(flash(&response).kind, FlashKind::Warning);
    assert_eq!(app.member_store.count_members().await.unwrap(), before);
}

#[test_context(TestContext)]
#[tokio::test]
async fn roster_is_ordered_by_name(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.add_member("Zacarias", "Louvor").await;
    app.add_member("Abel", "Louvor").await;

    let names: Vec<String> = app
        .member_store
        .list_members()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.nome)
        .collect();

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names.first().map(String::as_str), Some("Abel"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn remove_member_deletes_the_row(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    let member = app.add_member(&get_random_name(), "Louvor").await;

    let response = app
        .post_empty(&format!("/remover_obreiro/{}", member.id))
        .await;

    assert_eq!(location(&response), "/painel_lider");
    assert_eq!(flash(&response).kind, FlashKind::Success);
    assert!(app.member_store.get_member(member.id).await.is_err());

    let response = app
        .post_empty(&format!("/remover_obreiro/{}", member.id))
        .await;
    assert_eq!(flash(&response).message, "Obreiro não encontrado.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn dashboard_shows_counts_and_roster(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    let nome = get_random_name();
    let member = app.add_member(&nome, "Louvor").await;
    app.checkin_lider(member.id, true).await;

    let response = app.get("/painel_lider").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains(&nome));
    assert!(body.contains("<strong>1</strong><span>Presentes</span>"));
    assert!(body.contains("<strong>6</strong><span>Ausentes</span>"));
    assert!(body.contains("<strong>7</strong><span>Total</span>"));
}
