#[cfg(test)]
mod tests {
    use crate::client::Method;
    use crate::db::{get_course, get_room};
    use crate::test::test_utils::{
        ADMIN, COORDINATOR, call, create_standard_test_db, login_test_user, setup_test_client,
    };
    use rocket::http::Status;
    use serde_json::json;

    #[rocket::async_test]
    async fn test_course_round_trip() {
        let (client, _) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;

        let course = json!({
            "nome_curso": "Redes de Computadores",
            "carga_horaria": 1200,
            "area": "Tecnologia",
            "descricao": "Curso técnico em redes"
        });
        let (status, body) =
            call(&client, Method::Post, "/cursos", Some(&admin), Some(course.clone())).await;
        assert_eq!(status, Status::Created);
        assert_eq!(body["mensagem"], "Curso cadastrado com sucesso");
        let id = body["id_curso"].as_i64().unwrap();

        let (status, body) =
            call(&client, Method::Get, &format!("/cursos/{}", id), Some(&admin), None).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body["id_curso"], id);
        for field in ["nome_curso", "carga_horaria", "area", "descricao"] {
            assert_eq!(body[field], course[field], "field {} changed", field);
        }
    }

    #[rocket::async_test]
    async fn test_course_validation() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;

        let (status, body) = call(
            &client,
            Method::Post,
            "/cursos",
            Some(&admin),
            Some(json!({
                "nome_curso": "Sem carga",
                "carga_horaria": 0,
                "area": "X",
                "descricao": "Y"
            })),
        )
        .await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body["erro"], "A carga horária deve estar entre 1 e 20000 horas.");

        let (status, body) = call(
            &client,
            Method::Post,
            "/cursos",
            Some(&admin),
            Some(json!({"nome_curso": "Incompleto"})),
        )
        .await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(
            body["erro"],
            "Preencha todos os campos: nome_curso, carga_horaria, area, descricao."
        );
        assert_eq!(test_db.count("curso").await, 2);
    }

    #[rocket::async_test]
    async fn test_catalog_writes_are_admin_only() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let coordinator = login_test_user(&client, COORDINATOR).await;

        let (status, _) = call(
            &client,
            Method::Post,
            "/salas",
            Some(&coordinator),
            Some(json!({"nome_sala": "Lab 2"})),
        )
        .await;
        assert_eq!(status, Status::Forbidden);

        let (status, _) = call(&client, Method::Get, "/salas", Some(&coordinator), None).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(test_db.count("sala").await, 1);
    }

    #[rocket::async_test]
    async fn test_partial_course_update() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;
        let id = test_db.course_id("Informática");
        let path = format!("/cursos/{}", id);

        let (status, body) = call(
            &client,
            Method::Put,
            &path,
            Some(&admin),
            Some(json!({"carga_horaria": 3000})),
        )
        .await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body["mensagem"], "Curso atualizado com sucesso.");

        let course = get_course(&test_db.pool, id).await.unwrap().unwrap();
        assert_eq!(course.workload, 3000);
        assert_eq!(course.name, "Informática");

        let (status, body) = call(&client, Method::Put, &path, Some(&admin), Some(json!({}))).await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body["erro"], "Nenhum campo para atualizar fornecido.");

        let (status, body) = call(
            &client,
            Method::Put,
            "/cursos/999",
            Some(&admin),
            Some(json!({"area": "Saúde"})),
        )
        .await;
        assert_eq!(status, Status::NotFound);
        assert_eq!(body["erro"], "Curso não encontrado ou nenhum dado alterado.");
    }

    #[rocket::async_test]
    async fn test_room_update_clears_nullable_fields() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;
        let id = test_db.room_id("Lab 1");

        let (status, _) = call(
            &client,
            Method::Put,
            &format!("/salas/{}", id),
            Some(&admin),
            Some(json!({"recursos_sala": null})),
        )
        .await;
        assert_eq!(status, Status::Ok);

        let room = get_room(&test_db.pool, id).await.unwrap().unwrap();
        assert_eq!(room.resources, None);
        assert_eq!(room.kind.as_deref(), Some("Laboratório"));
    }

    #[rocket::async_test]
    async fn test_software_crud() {
        let (client, _) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;

        let (status, body) = call(
            &client,
            Method::Post,
            "/softwares",
            Some(&admin),
            Some(json!({"nome_software": "Figma", "observacao": "Licença educacional"})),
        )
        .await;
        assert_eq!(status, Status::Created);
        let path = format!("/softwares/{}", body["id_software"]);

        let (status, body) = call(&client, Method::Get, &path, Some(&admin), None).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body["observacao"], "Licença educacional");

        let (status, _) = call(&client, Method::Delete, &path, Some(&admin), None).await;
        assert_eq!(status, Status::Ok);

        let (status, body) = call(&client, Method::Get, &path, Some(&admin), None).await;
        assert_eq!(status, Status::NotFound);
        assert_eq!(body["erro"], "Software não encontrado.");
    }

    #[rocket::async_test]
    async fn test_discipline_hours_are_derived() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;
        let course_id = test_db.course_id("Informática");

        let (status, body) = call(
            &client,
            Method::Post,
            "/disciplinas",
            Some(&admin),
            Some(json!({
                "nome_disciplina": "Banco de Dados",
                "ch_pratica": 40,
                "ch_teorica": 22,
                "id_curso_fk": course_id
            })),
        )
        .await;
        assert_eq!(status, Status::Created);
        let path = format!("/disciplinas/{}", body["id_disciplina"]);

        let (_, body) = call(&client, Method::Get, &path, Some(&admin), None).await;
        assert_eq!(body["carga_horaria"], 62);
        assert_eq!(body["total_de_encontros"], 16);
        assert_eq!(body["nome_curso"], "Informática");

        let (status, _) = call(
            &client,
            Method::Put,
            &path,
            Some(&admin),
            Some(json!({"ch_teorica": 20})),
        )
        .await;
        assert_eq!(status, Status::Ok);

        let (_, body) = call(&client, Method::Get, &path, Some(&admin), None).await;
        assert_eq!(body["carga_horaria"], 60);
        assert_eq!(body["total_de_encontros"], 15);
    }

    #[rocket::async_test]
    async fn test_discipline_requires_existing_course() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;

        let (status, body) = call(
            &client,
            Method::Post,
            "/disciplinas",
            Some(&admin),
            Some(json!({
                "nome_disciplina": "Órfã",
                "ch_pratica": 10,
                "ch_teorica": 10,
                "id_curso_fk": 999
            })),
        )
        .await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body["erro"], "Curso informado não existe");
        assert_eq!(test_db.count("disciplina").await, 0);
    }

    #[rocket::async_test]
    async fn test_deleting_referenced_course_conflicts() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;
        let course_id = test_db.course_id("Informática");

        let (status, _) = call(
            &client,
            Method::Post,
            "/disciplinas",
            Some(&admin),
            Some(json!({
                "nome_disciplina": "Algoritmos",
                "ch_pratica": 40,
                "ch_teorica": 40,
                "id_curso_fk": course_id
            })),
        )
        .await;
        assert_eq!(status, Status::Created);

        let (status, body) = call(
            &client,
            Method::Delete,
            &format!("/cursos/{}", course_id),
            Some(&admin),
            None,
        )
        .await;
        assert_eq!(status, Status::Conflict);
        assert_eq!(
            body["erro"],
            "Não é possível deletar este curso pois ele está vinculado a disciplinas ou turmas."
        );
        assert!(get_course(&test_db.pool, course_id).await.unwrap().is_some());

        let (status, body) = call(&client, Method::Delete, "/cursos/999", Some(&admin), None).await;
        assert_eq!(status, Status::NotFound);
        assert_eq!(body["erro"], "Curso não encontrado.");
    }

    #[rocket::async_test]
    async fn test_discipline_hours_are_bounded() {
        let (client, test_db) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;
        let course_id = test_db.course_id("Informática");

        let (status, body) = call(
            &client,
            Method::Post,
            "/disciplinas",
            Some(&admin),
            Some(json!({
                "nome_disciplina": "Infinita",
                "ch_pratica": i64::MAX,
                "ch_teorica": 1,
                "id_curso_fk": course_id
            })),
        )
        .await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body["erro"], "A carga horária deve estar entre 0 e 10000 horas.");
        assert_eq!(test_db.count("disciplina").await, 0);

        let (status, body) = call(
            &client,
            Method::Post,
            "/disciplinas",
            Some(&admin),
            Some(json!({
                "nome_disciplina": "Redes",
                "ch_pratica": 10000,
                "ch_teorica": 10000,
                "id_curso_fk": course_id
            })),
        )
        .await;
        assert_eq!(status, Status::Created);
        let path = format!("/disciplinas/{}", body["id_disciplina"]);

        let (status, body) = call(
            &client,
            Method::Put,
            &path,
            Some(&admin),
            Some(json!({"ch_teorica": 10001})),
        )
        .await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body["erro"], "A carga horária deve estar entre 0 e 10000 horas.");

        let (status, body) = call(&client, Method::Get, "/disciplinas", Some(&admin), None).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body[0]["carga_horaria"], 20000);
        assert_eq!(body[0]["total_de_encontros"], 5000);

        let (status, _) = call(
            &client,
            Method::Post,
            "/cursos",
            Some(&admin),
            Some(json!({
                "nome_curso": "Sem fim",
                "carga_horaria": i64::MAX,
                "area": "X",
                "descricao": "Y"
            })),
        )
        .await;
        assert_eq!(status, Status::BadRequest);
    }

    #[rocket::async_test]
    async fn test_deleting_missing_rows_is_not_found() {
        let (client, _) = setup_test_client(create_standard_test_db().await).await;
        let admin = login_test_user(&client, ADMIN).await;

        for (path, message) in [
            ("/cursos/999", "Curso não encontrado."),
            ("/salas/999", "Sala não encontrada."),
            ("/softwares/999", "Software não encontrado."),
            ("/disciplinas/999", "Disciplina não encontrada."),
            ("/professor-alocacoes/999", "Alocação de professor não encontrada."),
        ] {
            let (status, body) = call(&client, Method::Delete, path, Some(&admin), None).await;
            assert_eq!(status, Status::NotFound, "{}", path);
            assert_eq!(body["erro"], message);
        }
    }
}
