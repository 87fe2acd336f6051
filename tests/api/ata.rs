use crate::helpers::{flash, get_random_name, location, TestApp, TestContext};
use checkin_service::domain::{Ata, AtaState, Department, MeetingType};
use checkin_service::services::ata_pdf::layout;
use checkin_service::utils::FlashKind;
use test_context::test_context;
use uuid::Uuid;

async fn submit_ata(app: &TestApp, tema: &str, presentes: &[i64]) -> reqwest::Response {
    let ids: Vec<String> = presentes.iter().map(i64::to_string).collect();
    let mut fields = vec![
        ("data", "2024-03-10"),
        ("tipo", "reuniao_obreiros"),
        ("departamento", "louvor"),
        ("tema", tema),
        ("local", "Templo sede"),
        ("observacoes", "Ensaio geral para o culto de domingo."),
    ];
    for id in &ids {
        fields.push(("presentes", id.as_str()));
    }
    app.post_form("/ata", &fields).await
}

async fn find_ata(app: &TestApp, tema: &str) -> Ata {
    app.ata_store
        .list_atas(false)
        .await
        .unwrap()
        .into_iter()
        .find(|ata| ata.tema == tema)
        .expect("ata was recorded")
}

#[test_context(TestContext)]
#[tokio::test]
async fn ata_form_lists_present_members(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    let present = app.add_member(&get_random_name(), "Louvor").await;
    let absent = app.add_member(&get_random_name(), "Louvor").await;
    app.checkin_lider(present.id, true).await;

    let response = app.get("/ata").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains(&present.nome));
    assert!(!body.contains(&absent.nome));
    assert!(body.contains("value=\"reuniao_obreiros\""));
}

#[test_context(TestContext)]
#[tokio::test]
async fn created_ata_snapshots_attendees(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    let a = app.add_member(&get_random_name(), "Louvor").await;
    let b = app.add_member(&get_random_name(), "Recepção").await;
    app.checkin_lider(a.id, true).await;
    let tema = format!("Tema {}", Uuid::new_v4());

    // b never checked in; a selected id is kept whether present or not.
    let response = submit_ata(app, &tema, &[a.id, b.id]).await;

    assert_eq!(location(&response), "/painel_lider");
    assert_eq!(flash(&response).kind, FlashKind::Success);

    let ata = find_ata(app, &tema).await;
    assert_eq!(ata.state, AtaState::Active);
    assert_eq!(ata.tipo, MeetingType::ReuniaoObreiros);
    assert_eq!(ata.departamento, Department::Louvor);
    assert_eq!(ata.data_label(), "10/03/2024");
    let names: Vec<&str> = ata.presentes.iter().map(|p| p.nome.as_str()).collect();
    assert_eq!(names, vec![a.nome.as_str(), b.nome.as_str()]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn snapshot_and_pdf_survive_member_deletion(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    let a = app.add_member(&get_random_name(), "Louvor").await;
    let b = app.add_member(&get_random_name(), "Louvor").await;
    let tema = format!("Tema {}", Uuid::new_v4());
    submit_ata(app, &tema, &[a.id, b.id]).await;
    let before = find_ata(app, &tema).await;

    app.member_store.delete_member(a.id).await.unwrap();

    let after = app.ata_store.get_ata(before.id).await.unwrap();
    assert_eq!(after.presentes, before.presentes);
    assert_eq!(layout(&after), layout(&before));

    let response = app.get(&format!("/gerar_ata_pdf/{}", before.id)).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/pdf"
    );
    let pdf = response.bytes().await.unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn stale_attendee_ids_are_skipped(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    let a = app.add_member(&get_random_name(), "Louvor").await;
    let tema = format!("Tema {}", Uuid::new_v4());

    submit_ata(app, &tema, &[a.id, 999_999]).await;

    let ata = find_ata(app, &tema).await;
    assert_eq!(ata.presentes.len(), 1);
    assert_eq!(ata.presentes[0].id, a.id);
}

#[test_context(TestContext)]
#[tokio::test]
async fn invalid_meeting_type_is_rejected(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;

    let response = app
        .post_form(
            "/ata",
            &[
                ("data", "2024-03-10"),
                ("tipo", "festa"),
                ("departamento", "geral"),
            ],
        )
        .await;

    assert_eq!(location(&response), "/ata");
    assert_eq!(flash(&response).message, "Tipo de reunião inválido.");
    assert!(app.ata_store.list_atas(false).await.unwrap().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn archiving_twice_keeps_ata_archived(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;
    let tema = format!("Tema {}", Uuid::new_v4());
    submit_ata(app, &tema, &[]).await;
    let ata = find_ata(app, &tema).await;

    for _ in 0..2 {
        let response = app.post_empty(&format!("/arquivar_ata/{}", ata.id)).await;
        assert_eq!(location(&response), "/painel_lider");
        assert_eq!(flash(&response).kind, FlashKind::Success);
    }

    let archived = app.ata_store.get_ata(ata.id).await.unwrap();
    assert_eq!(archived.state, AtaState::Archived);
    assert!(app.ata_store.list_atas(false).await.unwrap().is_empty());

    let response = app.get("/visualizar_atas_arquivadas").await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains(&tema));
}

#[test_context(TestContext)]
#[tokio::test]
async fn missing_ata_is_not_found(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;

    let response = app.get("/gerar_ata_pdf/424242").await;
    assert_eq!(location(&response), "/painel_lider");
    assert_eq!(flash(&response).message, "Ata não encontrada.");

    let response = app.post_empty("/arquivar_ata/424242").await;
    assert_eq!(flash(&response).message, "Ata não encontrada.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn malformed_attendee_id_redirects_with_notice(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.login_as_seed_leader().await;

    let response = app
        .post_form(
            "/ata",
            &[
                ("data", "2024-03-10"),
                ("tipo", "culto"),
                ("departamento", "geral"),
                ("presentes", "abc"),
            ],
        )
        .await;

    assert_eq!(location(&response), "/ata");
    assert_eq!(flash(&response).message, "Dados do formulário inválidos.");
    assert!(app.ata_store.list_atas(false).await.unwrap().is_empty());
}
