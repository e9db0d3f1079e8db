#[cfg(test)]
mod tests {
    use crate::client::Method;
    use crate::test::test_db::TestDb;
    use crate::test::test_utils::{
        ADMIN, PROFESSOR, call, create_standard_test_db, login_test_user, setup_test_client,
    };
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;
    use serde_json::{Value, json};

    struct Fixture {
        professor: i64,
        discipline: i64,
        section: i64,
        room: i64,
    }

    async fn create(client: &Client, token: &str, path: &str, body: Value, id_field: &str) -> i64 {
        let (status, body) = call(client, Method::Post, path, Some(token), Some(body)).await;
        assert_eq!(status, Status::Created, "creating {} failed: {}", path, body);
        body[id_field].as_i64().unwrap()
    }

    async fn fixture(client: &Client, test_db: &TestDb, admin: &str) -> Fixture {
        let course = test_db.course_id("Informática");

        let professor = create(
            client,
            admin,
            "/professores",
            json!({"id_usuario_fk": test_db.user_id(PROFESSOR)}),
            "id_professor",
        )
        .await;
        let discipline = create(
            client,
            admin,
            "/disciplinas",
            json!({
                "nome_disciplina": "Programação Web",
                "ch_pratica": 60,
                "ch_teorica": 20,
                "id_curso_fk": course
            }),
            "id_disciplina",
        )
        .await;
        let section = create(
            client,
            admin,
            "/turmas",
            json!({
                "id_curso_fk": course,
                "numero_turma": "101",
                "modulo_ano": "2025/1",
                "turno": "noturno"
            }),
            "id_turma",
        )
        .await;

        Fixture {
            professor,
            discipline,
            section,
            room: test_db.room_id("Lab 1"),
        }
    }

    #[rocket::async_test]
    async fn test_duplicate_allocation_conflicts() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;
        let f = fixture(&client, &test_db, &admin).await;

        let allocation = json!({
            "id_professor_fk": f.professor,
            "id_disciplina_fk": f.discipline,
            "id_turma_fk": f.section,
            "id_sala_fk": f.room
        });
        let id = create(
            &client,
            &admin,
            "/professor-alocacoes",
            allocation.clone(),
            "id_professor_alocacao",
        )
        .await;

        let (status, body) = call(
            &client,
            Method::Post,
            "/professor-alocacoes",
            Some(&admin),
            Some(allocation),
        )
        .await;
        assert_eq!(status, Status::Conflict);
        assert_eq!(body["erro"], "Esta alocação (professor, disciplina, turma) já existe.");
        assert_eq!(test_db.count("professor_alocacao").await, 1);

        let (status, body) = call(
            &client,
            Method::Get,
            &format!("/professor-alocacoes/{}", id),
            Some(&admin),
            None,
        )
        .await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body["nome_professor"], "Ana Souza");
        assert_eq!(body["nome_disciplina"], "Programação Web");
        assert_eq!(body["nome_sala"], "Lab 1");
        assert_eq!(body["turno"], "noturno");
    }

    #[rocket::async_test]
    async fn test_allocation_with_missing_reference() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;
        let f = fixture(&client, &test_db, &admin).await;

        let (status, body) = call(
            &client,
            Method::Post,
            "/professor-alocacoes",
            Some(&admin),
            Some(json!({
                "id_professor_fk": f.professor,
                "id_disciplina_fk": 999,
                "id_turma_fk": f.section
            })),
        )
        .await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body["erro"], "Professor, disciplina, turma ou sala informados não existem.");

        let (status, body) = call(
            &client,
            Method::Post,
            "/professor-alocacoes",
            Some(&admin),
            Some(json!({"id_professor_fk": f.professor})),
        )
        .await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(
            body["erro"],
            "Os campos id_professor_fk, id_disciplina_fk e id_turma_fk são obrigatórios."
        );
        assert_eq!(test_db.count("professor_alocacao").await, 0);
    }

    #[rocket::async_test]
    async fn test_allocation_room_can_be_removed() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;
        let f = fixture(&client, &test_db, &admin).await;

        let id = create(
            &client,
            &admin,
            "/professor-alocacoes",
            json!({
                "id_professor_fk": f.professor,
                "id_disciplina_fk": f.discipline,
                "id_turma_fk": f.section,
                "id_sala_fk": f.room
            }),
            "id_professor_alocacao",
        )
        .await;
        let path = format!("/professor-alocacoes/{}", id);

        let (status, _) = call(
            &client,
            Method::Put,
            &path,
            Some(&admin),
            Some(json!({"id_sala_fk": null})),
        )
        .await;
        assert_eq!(status, Status::Ok);

        let (_, body) = call(&client, Method::Get, &path, Some(&admin), None).await;
        assert_eq!(body["id_sala_fk"], Value::Null);
        assert_eq!(body["nome_sala"], Value::Null);
    }

    #[rocket::async_test]
    async fn test_referenced_rows_survive_delete() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;
        let f = fixture(&client, &test_db, &admin).await;

        let id = create(
            &client,
            &admin,
            "/professor-alocacoes",
            json!({
                "id_professor_fk": f.professor,
                "id_disciplina_fk": f.discipline,
                "id_turma_fk": f.section,
                "id_sala_fk": f.room
            }),
            "id_professor_alocacao",
        )
        .await;

        for path in [
            format!("/professores/{}", f.professor),
            format!("/disciplinas/{}", f.discipline),
            format!("/turmas/{}", f.section),
            format!("/salas/{}", f.room),
        ] {
            let (status, _) = call(&client, Method::Delete, &path, Some(&admin), None).await;
            assert_eq!(status, Status::Conflict, "{} should be protected", path);

            let (status, _) = call(&client, Method::Get, &path, Some(&admin), None).await;
            assert_eq!(status, Status::Ok, "{} should still exist", path);
        }

        let path = format!("/professor-alocacoes/{}", id);
        let (status, _) = call(&client, Method::Delete, &path, Some(&admin), None).await;
        assert_eq!(status, Status::Ok);

        let (status, _) = call(
            &client,
            Method::Delete,
            &format!("/salas/{}", f.room),
            Some(&admin),
            None,
        )
        .await;
        assert_eq!(status, Status::Ok);
    }

    #[rocket::async_test]
    async fn test_software_links_and_curriculum_report() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;
        let f = fixture(&client, &test_db, &admin).await;

        for software in ["VS Code", "PostgreSQL"] {
            let (status, body) = call(
                &client,
                Method::Post,
                "/disciplina-software",
                Some(&admin),
                Some(json!({
                    "id_disciplina_fk": f.discipline,
                    "id_software_fk": test_db.software_id(software)
                })),
            )
            .await;
            assert_eq!(status, Status::Created);
            assert_eq!(body["mensagem"], "Software vinculado à disciplina!");
        }

        let (status, body) = call(
            &client,
            Method::Post,
            "/disciplina-software",
            Some(&admin),
            Some(json!({"id_disciplina_fk": f.discipline, "id_software_fk": 999})),
        )
        .await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body["erro"], "Disciplina ou software informados não existem.");

        let (status, body) = call(
            &client,
            Method::Post,
            "/disciplina-software",
            Some(&admin),
            Some(json!({
                "id_disciplina_fk": f.discipline,
                "id_software_fk": test_db.software_id("VS Code")
            })),
        )
        .await;
        assert_eq!(status, Status::Conflict);
        assert_eq!(body["erro"], "Este software já está vinculado a esta disciplina.");
        assert_eq!(test_db.count("disciplina_software").await, 2);

        let (status, body) = call(
            &client,
            Method::Delete,
            &format!("/softwares/{}", test_db.software_id("PostgreSQL")),
            Some(&admin),
            None,
        )
        .await;
        assert_eq!(status, Status::Conflict);
        assert_eq!(
            body["erro"],
            "Não é possível deletar este software pois ele está vinculado a disciplinas."
        );
        assert_eq!(test_db.count("software").await, 2);

        let (status, body) = call(
            &client,
            Method::Delete,
            &format!("/disciplina-software/{}/999", f.discipline),
            Some(&admin),
            None,
        )
        .await;
        assert_eq!(status, Status::NotFound);
        assert_eq!(body["erro"], "Vínculo entre disciplina e software não encontrado.");

        create(
            &client,
            &admin,
            "/professor-alocacoes",
            json!({
                "id_professor_fk": f.professor,
                "id_disciplina_fk": f.discipline,
                "id_turma_fk": f.section,
                "id_sala_fk": f.room
            }),
            "id_professor_alocacao",
        )
        .await;

        let professor = login_test_user(&client, PROFESSOR).await;
        let (status, body) =
            call(&client, Method::Get, "/grade-curricular", Some(&professor), None).await;
        assert_eq!(status, Status::Ok);

        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row["nome_professor"], "Ana Souza");
        assert_eq!(row["nome_curso"], "Informática");
        assert_eq!(row["ch_total"], 80);
        assert_eq!(row["total_de_encontros"], 20);
        assert_eq!(row["laboratorio_sala"], "Lab 1");
        assert_eq!(row["recursos_lab"], "30 computadores");

        let software = row["softwares_usados"].as_str().unwrap();
        assert!(software.contains("VS Code"));
        assert!(software.contains("PostgreSQL"));

        let (status, body) = call(
            &client,
            Method::Get,
            "/professores-com-nomes",
            Some(&professor),
            None,
        )
        .await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body[0]["nome_professor"], "Ana Souza");
        assert_eq!(body[0]["disciplinas_alocadas"], "Programação Web");
        assert!(body[0]["turmas_alocadas"].as_str().unwrap().contains("101"));

        let (status, _) = call(
            &client,
            Method::Delete,
            &format!(
                "/disciplina-software/{}/{}",
                f.discipline,
                test_db.software_id("VS Code")
            ),
            Some(&admin),
            None,
        )
        .await;
        assert_eq!(status, Status::Ok);

        let (_, body) =
            call(&client, Method::Get, "/disciplina-software", Some(&admin), None).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["nome_software"], "PostgreSQL");
    }
}
