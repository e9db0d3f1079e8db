#[cfg(test)]
mod tests {
    use crate::client::{Allocations, ApiClient, Courses, Rooms};
    use crate::db::get_course;
    use crate::test::test_db::{STANDARD_PASSWORD, TestDb};
    use crate::test::test_utils::{
        ADMIN, LocalTransport, PROFESSOR, create_standard_test_db, setup_test_client,
    };
    use crate::ui::form::FormValues;
    use crate::ui::links::LinksPage;
    use crate::ui::pages::AllocationRefs;
    use crate::ui::report::ReportPage;
    use crate::ui::{self, CrudPage, Mode, ScriptedConsole};

    async fn logged_in(email: &str) -> (ApiClient<LocalTransport>, TestDb) {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let mut api = ApiClient::new(LocalTransport { client });
        api.login(email, STANDARD_PASSWORD).await.unwrap();
        (api, test_db)
    }

    #[rocket::async_test]
    async fn test_page_create_edit_delete_cycle() {
        let (api, test_db) = logged_in(ADMIN).await;

        let mut page = CrudPage::<Courses>::open(&api).await;
        assert_eq!(page.rows.len(), 2);
        assert!(page.notice.is_none());

        let form = FormValues::from([
            ("nome_curso", "Enfermagem".to_string()),
            ("carga_horaria", "1800".to_string()),
            ("area", "Saúde".to_string()),
            ("descricao", "Técnico em enfermagem".to_string()),
        ]);
        assert!(page.submit(&api, &form).await);
        assert_eq!(page.rows.len(), 3);
        assert!(page.notice.as_deref().unwrap().contains("cadastrado com sucesso"));

        let id = page.rows.iter().find(|c| c.name == "Enfermagem").unwrap().id;
        let mut values = page.begin_edit(id).unwrap();
        assert_eq!(page.mode, Mode::Editing(id));
        assert_eq!(values["carga_horaria"], "1800");

        values.insert("carga_horaria", "2000".to_string());
        assert!(page.submit(&api, &values).await);
        assert_eq!(page.mode, Mode::Creating);
        assert_eq!(page.notice.as_deref(), Some("Curso atualizado com sucesso."));
        assert_eq!(
            get_course(&test_db.pool, id).await.unwrap().unwrap().workload,
            2000
        );

        assert!(page.delete(&api, id).await);
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.notice.as_deref(), Some("Curso deletado com sucesso."));
    }

    #[rocket::async_test]
    async fn test_server_errors_become_page_notices() {
        let (api, test_db) = logged_in(ADMIN).await;
        let mut page = CrudPage::<Courses>::open(&api).await;

        let form = FormValues::from([
            ("nome_curso", "Vazio".to_string()),
            ("carga_horaria", "0".to_string()),
            ("area", "X".to_string()),
            ("descricao", "Y".to_string()),
        ]);
        assert!(!page.submit(&api, &form).await);
        assert_eq!(
            page.notice.as_deref(),
            Some("A carga horária deve estar entre 1 e 20000 horas.")
        );

        assert!(!page.delete(&api, 999).await);
        assert_eq!(page.notice.as_deref(), Some("Curso não encontrado."));
        assert_eq!(test_db.count("curso").await, 2);
    }

    #[rocket::async_test]
    async fn test_non_admin_sees_forbidden_message() {
        let (api, _) = logged_in(PROFESSOR).await;
        let mut page = CrudPage::<Rooms>::open(&api).await;
        assert_eq!(page.rows.len(), 1);

        let form = FormValues::from([("nome_sala", "Lab 9".to_string())]);
        assert!(!page.submit(&api, &form).await);
        assert_eq!(
            page.notice.as_deref(),
            Some("Acesso negado. Você não tem permissão para realizar esta ação.")
        );
    }

    #[rocket::async_test]
    async fn test_allocation_page_loads_all_reference_lists() {
        let (api, _) = logged_in(ADMIN).await;
        let page = CrudPage::<Allocations>::open(&api).await;

        let AllocationRefs {
            courses,
            rooms,
            professors,
            ..
        } = &page.refs;
        assert_eq!(courses.len(), 2);
        assert_eq!(rooms.len(), 1);
        assert!(professors.is_empty());
        assert!(page.rows.is_empty());
        assert!(page.notice.is_none());
    }

    #[rocket::async_test]
    async fn test_scripted_session_creates_course() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let mut api = ApiClient::new(LocalTransport { client });

        let mut console = ScriptedConsole::new(&[
            "errada",
            STANDARD_PASSWORD,
            "2",
            "n",
            "Logística",
            "mil",
            "1000",
            "Gestão",
            "Técnico em logística",
            "v",
            "s",
        ]);

        ui::run(&mut api, &mut console, Some(ADMIN)).await;

        let transcript = console.transcript();
        assert!(transcript.contains("Senha incorreta!"));
        assert!(transcript.contains("Login efetuado com sucesso"));
        assert!(transcript.contains("Valor numérico inválido."));
        assert!(transcript.contains("cadastrado com sucesso"));
        assert!(transcript.contains("Logística"));
        assert_eq!(test_db.count("curso").await, 3);
        assert!(api.token().is_none());
    }

    #[rocket::async_test]
    async fn test_scripted_delete_needs_confirmation() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let mut api = ApiClient::new(LocalTransport { client });
        let course_id = test_db.course_id("Administração");
        let delete = format!("d {}", course_id);

        let mut console = ScriptedConsole::new(&[
            STANDARD_PASSWORD,
            "2",
            delete.as_str(),
            "n",
            delete.as_str(),
            "s",
            "v",
            "s",
        ]);

        ui::run(&mut api, &mut console, Some(ADMIN)).await;

        let transcript = console.transcript();
        assert!(transcript.contains("Exclusão cancelada."));
        assert!(transcript.contains("Curso deletado com sucesso."));
        assert_eq!(test_db.count("curso").await, 1);
    }

    #[rocket::async_test]
    async fn test_scripted_edit_keeps_blank_answers() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let mut api = ApiClient::new(LocalTransport { client });
        let course_id = test_db.course_id("Informática");
        let edit = format!("e {}", course_id);

        let mut console = ScriptedConsole::new(&[
            STANDARD_PASSWORD,
            "2",
            edit.as_str(),
            "",
            "3200",
            "",
            "",
            "v",
            "s",
        ]);

        ui::run(&mut api, &mut console, Some(ADMIN)).await;

        assert!(console.transcript().contains("Nome do curso [Informática]"));
        let course = get_course(&test_db.pool, course_id).await.unwrap().unwrap();
        assert_eq!(course.name, "Informática");
        assert_eq!(course.workload, 3200);
        assert_eq!(course.area, "Tecnologia");
    }

    #[rocket::async_test]
    async fn test_links_and_report_pages() {
        let (api, test_db) = logged_in(ADMIN).await;

        let mut links = LinksPage::open(&api).await;
        assert!(links.rows.is_empty());
        assert_eq!(links.software.len(), 2);

        assert!(!links.link(&api, 999, test_db.software_id("VS Code")).await);
        assert_eq!(
            links.notice.as_deref(),
            Some("Disciplina ou software informados não existem.")
        );

        let report = ReportPage::open(&api).await;
        assert!(report.rows.is_empty());
        assert!(report.notice.is_none());
        assert!(report.render().contains("(nenhum registro)"));
    }

    #[rocket::async_test]
    async fn test_missing_token_message_reaches_page() {
        let (client, _) = setup_test_client(create_standard_test_db().await).await;
        let api = ApiClient::new(LocalTransport { client });

        let page = CrudPage::<Courses>::open(&api).await;
        assert!(page.rows.is_empty());
        assert_eq!(
            page.notice.as_deref(),
            Some("Token de autenticação não fornecido.")
        );
    }
}
