use super::*;

/// Tests listing the pilots of a stage.
///
/// Expected: Ok with pilots ordered by racing number
#[tokio::test]
async fn orders_pilots_by_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, stage) = factory::helpers::create_stage_with_dependencies(db).await?;
    for number in [42, 7, 19] {
        let user = factory::create_user(db).await?;
        factory::create_pilot(db, user.id, stage.id, number).await?;
    }

    let pilots = ParticipantRepository::new(db)
        .get_pilots_by_stage(stage.id)
        .await?;

    assert_eq!(
        pilots.iter().map(|p| p.number).collect::<Vec<_>>(),
        vec![7, 19, 42]
    );

    Ok(())
}

/// Tests listing the judges of a stage and collecting participant ids.
///
/// Expected: Ok with both judges, and ids of both kinds for the stage
#[tokio::test]
async fn lists_judges_and_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, _, stage) = factory::helpers::create_stage_with_dependencies(db).await?;
    let repo = ParticipantRepository::new(db);
    for criterion in [Criterion::Style, Criterion::Line] {
        let user = factory::create_user(db).await?;
        repo.create_judge(CreateJudgeParam {
            user_id: user.id,
            stage_id: stage.id,
            full_name: format!("Judge {}", criterion.as_str()),
            criterion,
        })
        .await?;
    }
    let pilot = factory::create_pilot(db, admin.id, stage.id, 3).await?;

    let judges = repo.get_judges_by_stage(stage.id).await?;
    assert_eq!(
        judges.iter().map(|j| j.criterion).collect::<Vec<_>>(),
        vec![Criterion::Style, Criterion::Line]
    );

    let (judge_ids, pilot_ids) = repo.get_ids_by_stages(&[stage.id]).await?;
    assert_eq!(judge_ids.len(), 2);
    assert_eq!(pilot_ids, vec![pilot.id]);

    Ok(())
}
