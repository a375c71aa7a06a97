mod common;

use common::{assert_no_password, review_body};
use serde_json::{json, Value};

// test me: cargo t --test review -- --nocapture
#[tokio::test]
async fn create_returns_201_without_password() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app.post_review(&review_body(5, "p")).await;
    assert_eq!(201, response.status().as_u16());

    let body: Value = response.json().await.unwrap();
    assert_eq!("작성완료 되었습니다.", body["message"]);
    assert_eq!(5, body["data"]["star"]);
    assert_eq!("T", body["data"]["title"]);
    assert!(body["data"]["id"].is_i64());
    assert!(body["data"]["created_at"].is_string());
    assert_no_password(&body);

    let stored: (String,) = sqlx::query_as("SELECT password FROM review")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_ne!("p", stored.0);
    assert!(stored.0.starts_with("$argon2id$"));
}

#[tokio::test]
async fn star_must_be_between_0_and_10() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    for star in [0, 10] {
        let response = app.post_review(&review_body(star, "p")).await;
        assert_eq!(201, response.status().as_u16(), "star {}", star);
    }

    for star in [-1, 11] {
        let response = app.post_review(&review_body(star, "p")).await;
        assert_eq!(400, response.status().as_u16(), "star {}", star);
        let body: Value = response.json().await.unwrap();
        assert_eq!("별점은 0점부터 10점까지 넣을 수 있습니다.", body["errorMessage"]);
    }

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM review")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(2, count.0);
}

#[tokio::test]
async fn list_is_newest_first_and_projected() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    for title in ["first", "second", "third"] {
        let mut body = review_body(3, "p");
        body["title"] = json!(title);
        assert_eq!(201, app.post_review(&body).await.status().as_u16());
    }

    let response = app.get("/reviews").await;
    assert_eq!(200, response.status().as_u16());

    let body: Value = response.json().await.unwrap();
    let reviews = body["data"].as_array().unwrap();
    let titles: Vec<&str> = reviews.iter().map(|r| r["title"].as_str().unwrap()).collect();
    assert_eq!(vec!["third", "second", "first"], titles);

    let mut keys: Vec<&String> = reviews[0].as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(
        vec!["book_name", "created_at", "star", "title", "user_name"],
        keys
    );
    assert_no_password(&body);
}

#[tokio::test]
async fn get_returns_record_or_404() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let id = app.create_review("p").await;

    let response = app.get(&format!("/reviews/{}", id)).await;
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(id, body["data"]["id"].as_i64().unwrap());
    assert_eq!("C", body["data"]["content"]);
    assert_no_password(&body);

    let response = app.get(&format!("/reviews/{}", id + 1000)).await;
    assert_eq!(404, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!("찾는 리뷰가 없습니다.", body["errorMessage"]);
}

#[tokio::test]
async fn update_delete_scenario() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let id = app.create_review("p").await;
    let path = format!("/reviews/{}", id);

    // wrong password
    let mut body = review_body(7, "wrong");
    body["title"] = json!("changed");
    let response = app.put(&path, &body).await;
    assert_eq!(400, response.status().as_u16());
    let error: Value = response.json().await.unwrap();
    assert_eq!("비밀번호가 틀렸습니다.", error["errorMessage"]);

    let current: Value = app.get(&path).await.json().await.unwrap();
    assert_eq!("T", current["data"]["title"]);
    assert_eq!(5, current["data"]["star"]);

    // star out of range with the right password
    let response = app.put(&path, &review_body(11, "p")).await;
    assert_eq!(400, response.status().as_u16());
    let error: Value = response.json().await.unwrap();
    assert_eq!("별점은 0점부터 10점까지 넣을 수 있습니다.", error["errorMessage"]);

    let response = app.delete(&path, &json!({ "password": "p" })).await;
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!("리뷰가 삭제 되었습니다.", body["message"]);

    assert_eq!(404, app.get(&path).await.status().as_u16());
}

#[tokio::test]
async fn update_with_right_password_changes_fields_only() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let id = app.create_review("p").await;
    let path = format!("/reviews/{}", id);
    let before: Value = app.get(&path).await.json().await.unwrap();

    let body = json!({
        "title": "T2",
        "book_name": "B2",
        "content": "C2",
        "user_name": "u2",
        "star": 9,
        "password": "p",
    });
    let response = app.put(&path, &body).await;
    assert_eq!(200, response.status().as_u16());

    let updated: Value = response.json().await.unwrap();
    assert_eq!("수정에 성공했습니다", updated["message"]);
    assert_eq!("T2", updated["data"]["title"]);
    assert_eq!("B2", updated["data"]["book_name"]);
    assert_eq!("C2", updated["data"]["content"]);
    assert_eq!("u2", updated["data"]["user_name"]);
    assert_eq!(9, updated["data"]["star"]);
    assert_eq!(before["data"]["created_at"], updated["data"]["created_at"]);
    assert_ne!(before["data"]["updated_at"], updated["data"]["updated_at"]);
    assert_no_password(&updated);

    // the password is not part of the editable fields
    let response = app.delete(&path, &json!({ "password": "p" })).await;
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn update_and_delete_of_missing_review_is_404() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app.put("/reviews/4242", &review_body(5, "p")).await;
    assert_eq!(404, response.status().as_u16());

    let response = app.delete("/reviews/4242", &json!({ "password": "p" })).await;
    assert_eq!(404, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!("존재하지 않는 리뷰입니다.", body["errorMessage"]);
}

#[tokio::test]
async fn delete_with_wrong_password_keeps_review() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let id = app.create_review("p").await;
    let path = format!("/reviews/{}", id);

    let response = app.delete(&path, &json!({ "password": "nope" })).await;
    assert_eq!(400, response.status().as_u16());

    assert_eq!(200, app.get(&path).await.status().as_u16());
}

#[tokio::test]
async fn delete_review_removes_its_comments() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let id = app.create_review("p").await;
    let other = app.create_review("p").await;
    app.create_comment(id, "one", "c").await;
    app.create_comment(id, "two", "c").await;
    app.create_comment(other, "kept", "c").await;

    let response = app
        .delete(&format!("/reviews/{}", id), &json!({ "password": "p" }))
        .await;
    assert_eq!(200, response.status().as_u16());

    let orphans: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comment WHERE review_id = $1")
        .bind(id as i32)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(0, orphans.0);

    let kept: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comment WHERE review_id = $1")
        .bind(other as i32)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(1, kept.0);
}
