use crate::helpers::{flash, location, TestApp, TestContext};
use checkin_service::domain::NewMember;
use checkin_service::utils::FlashKind;
use test_context::test_context;
use welds::Client;

const REJECTED_NAME: &str = "Nome Rejeitado";

/// Makes the store fail on one specific insert, partway through a batch.
async fn reject_inserts_named(app: &TestApp, nome: &str) {
    let client = app.database.client().await.unwrap();
    let sql = format!(
        "CREATE TRIGGER rejeita_obreiro BEFORE INSERT ON membros \
         WHEN NEW.nome = '{}' BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        nome
    );
    client.execute(&sql, &[]).await.unwrap();
}

#[test_context(TestContext)]
#[tokio::test]
async fn template_download_is_a_csv_attachment(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;

    let response = app.get("/download_modelo_obreiro").await;

    assert_eq!(response.status().as_u16(), 200);
    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert!(disposition.contains("modelo_obreiros.csv"));
    let body = response.bytes().await.unwrap();
    let text = String::from_utf8_lossy(&body);
    assert!(text.trim_start_matches('\u{feff}').starts_with("nome,grupo,telefone,email"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn import_reports_count_and_skips_blank_names(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    let before = app.member_store.count_members().await.unwrap();
    let csv = "nome;grupo;telefone;email\n\
               Lucas Almeida;Louvor;(11) 90000-0001;lucas@example.com\n\
               ;Louvor;(11) 90000-0002;\n\
               Beatriz Souza;Recepção;;\n\
               ;;;\n";

    let response = app.upload_obreiros(csv).await;

    assert_eq!(location(&response), "/painel_lider");
    let notice = flash(&response);
    assert_eq!(notice.kind, FlashKind::Success);
    assert_eq!(notice.message, "2 obreiros importados com sucesso!");
    assert_eq!(app.member_store.count_members().await.unwrap(), before + 2);

    let members = app.member_store.list_members().await.unwrap();
    let lucas = members.iter().find(|m| m.nome == "Lucas Almeida").unwrap();
    assert_eq!(lucas.telefone, "(11) 90000-0001");
    assert!(!lucas.presente);
}

#[test_context(TestContext)]
#[tokio::test]
async fn import_without_telefone_column_inserts_nothing(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    let before = app.member_store.count_members().await.unwrap();
    let csv = "nome,grupo,email\nLucas Almeida,Louvor,lucas@example.com\n";

    let response = app.upload_obreiros(csv).await;

    assert_eq!(location(&response), "/painel_lider");
    let notice = flash(&response);
    assert_eq!(notice.kind, FlashKind::Warning);
    assert!(notice.message.contains("telefone"));
    assert_eq!(app.member_store.count_members().await.unwrap(), before);
}

#[test_context(TestContext)]
#[tokio::test]
async fn import_requires_session(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let before = app.member_store.count_members().await.unwrap();

    let response = app
        .upload_obreiros("nome,grupo,telefone,email\nLucas,Louvor,,\n")
        .await;

    assert_eq!(location(&response), "/login_lider");
    assert_eq!(app.member_store.count_members().await.unwrap(), before);
}

#[test_context(TestContext)]
#[tokio::test]
async fn failed_batch_inserts_no_members(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    reject_inserts_named(app, REJECTED_NAME).await;
    let before = app.member_store.count_members().await.unwrap();

    let result = app
        .member_store
        .add_members(vec![
            NewMember::new("Lucas Almeida", "Louvor"),
            NewMember::new(REJECTED_NAME, "Louvor"),
            NewMember::new("Beatriz Souza", "Recepção"),
        ])
        .await;

    assert!(result.is_err());
    assert_eq!(app.member_store.count_members().await.unwrap(), before);
}

#[test_context(TestContext)]
#[tokio::test]
async fn upload_failing_midway_imports_nothing(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    reject_inserts_named(app, REJECTED_NAME).await;
    let before = app.member_store.count_members().await.unwrap();
    let csv = format!(
        "nome,grupo,telefone,email\n\
         Lucas Almeida,Louvor,,\n\
         {},Louvor,,\n\
         Beatriz Souza,Recepção,,\n",
        REJECTED_NAME
    );

    let response = app.upload_obreiros(&csv).await;

    assert_eq!(location(&response), "/painel_lider");
    let notice = flash(&response);
    assert_eq!(notice.kind, FlashKind::Danger);
    assert_eq!(
        notice.message,
        "Erro ao importar obreiros. Nenhum obreiro foi importado."
    );
    assert_eq!(app.member_store.count_members().await.unwrap(), before);
}

#[test_context(TestContext)]
#[tokio::test]
async fn windows_1252_upload_keeps_accents(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;

    let csv = b"nome;grupo;telefone;email\nJo\xe3o Batista;Intercess\xe3o;;\n";

    let response = app.upload_obreiros_bytes(csv.to_vec()).await;

    assert_eq!(flash(&response).message, "1 obreiros importados com sucesso!");
    let members = app.member_store.list_members().await.unwrap();
    let member = members
        .iter()
        .find(|m| m.nome == "João Batista")
        .expect("accented name was imported");
    assert_eq!(member.grupo, "Intercessão");
}
