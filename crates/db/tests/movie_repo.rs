//! Integration tests for the movie and director repositories.
//!
//! Each test gets a fresh SQLite database with the reference schema applied.

use cinedex_db::models::director::Director;
use cinedex_db::models::movie::{Movie, MovieInput, MovieName};
use cinedex_db::repositories::{DirectorRepo, MovieRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_director(pool: &SqlitePool, id: i64, name: &str) {
    sqlx::query("INSERT INTO director (director_id, director_name) VALUES (?1, ?2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

fn new_movie(director_id: i64, name: &str, lead: &str) -> MovieInput {
    MovieInput {
        director_id,
        movie_name: name.to_string(),
        lead_actor: lead.to_string(),
    }
}

fn names(rows: &[MovieName]) -> Vec<&str> {
    rows.iter().map(|r| r.movie_name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_find_returns_same_fields(pool: SqlitePool) {
    seed_director(&pool, 1, "Christopher Nolan").await;

    let id = MovieRepo::create(&pool, &new_movie(1, "Inception", "DiCaprio"))
        .await
        .unwrap();

    let movie = MovieRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(
        movie,
        Movie {
            movie_id: id,
            director_id: 1,
            movie_name: "Inception".into(),
            lead_actor: "DiCaprio".into(),
        }
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_missing_movie_returns_none(pool: SqlitePool) {
    let movie = MovieRepo::find_by_id(&pool, 4242).await.unwrap();
    assert!(movie.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_names_reflects_adds_and_deletes(pool: SqlitePool) {
    seed_director(&pool, 1, "Nolan").await;

    let a = MovieRepo::create(&pool, &new_movie(1, "A", "x")).await.unwrap();
    MovieRepo::create(&pool, &new_movie(1, "B", "y")).await.unwrap();
    let c = MovieRepo::create(&pool, &new_movie(1, "C", "z")).await.unwrap();

    assert_eq!(MovieRepo::delete(&pool, a).await.unwrap(), 1);
    assert_eq!(MovieRepo::delete(&pool, c).await.unwrap(), 1);

    let rows = MovieRepo::list_names(&pool).await.unwrap();
    assert_eq!(names(&rows), vec!["B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_overwrites_all_columns(pool: SqlitePool) {
    seed_director(&pool, 1, "Nolan").await;
    seed_director(&pool, 2, "Villeneuve").await;
    let id = MovieRepo::create(&pool, &new_movie(1, "Draft", "Nobody"))
        .await
        .unwrap();

    let changed = MovieRepo::update(&pool, id, &new_movie(2, "Dune", "Chalamet"))
        .await
        .unwrap();
    assert_eq!(changed, 1);

    let movie = MovieRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(movie.director_id, 2);
    assert_eq!(movie.movie_name, "Dune");
    assert_eq!(movie.lead_actor, "Chalamet");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_movie_changes_nothing(pool: SqlitePool) {
    seed_director(&pool, 1, "Nolan").await;

    let changed = MovieRepo::update(&pool, 77, &new_movie(1, "Ghost", "Nobody"))
        .await
        .unwrap();
    assert_eq!(changed, 0);
    assert!(MovieRepo::list_names(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_movie_is_not_an_error(pool: SqlitePool) {
    assert_eq!(MovieRepo::delete(&pool, 9).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_director_keeps_insertion_order(pool: SqlitePool) {
    seed_director(&pool, 1, "Nolan").await;
    seed_director(&pool, 2, "Villeneuve").await;
    MovieRepo::create(&pool, &new_movie(1, "A", "x")).await.unwrap();
    MovieRepo::create(&pool, &new_movie(2, "Other", "y")).await.unwrap();
    MovieRepo::create(&pool, &new_movie(1, "B", "z")).await.unwrap();

    let rows = MovieRepo::list_names_by_director(&pool, 1).await.unwrap();
    assert_eq!(names(&rows), vec!["A", "B"]);

    let none = MovieRepo::list_names_by_director(&pool, 3).await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_unknown_director_violates_foreign_key(pool: SqlitePool) {
    let err = MovieRepo::create(&pool, &new_movie(99, "Orphan", "Nobody"))
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert!(db_err.is_foreign_key_violation());
}

// ---------------------------------------------------------------------------
// Directors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_directors_ordered_by_id(pool: SqlitePool) {
    seed_director(&pool, 2, "Villeneuve").await;
    seed_director(&pool, 1, "Nolan").await;

    let directors = DirectorRepo::list(&pool).await.unwrap();
    assert_eq!(
        directors,
        vec![
            Director {
                director_id: 1,
                director_name: "Nolan".into(),
            },
            Director {
                director_id: 2,
                director_name: "Villeneuve".into(),
            },
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn exists_reports_presence(pool: SqlitePool) {
    seed_director(&pool, 1, "Nolan").await;

    assert!(DirectorRepo::exists(&pool, 1).await.unwrap());
    assert!(!DirectorRepo::exists(&pool, 2).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn catalog_stats_counts_both_tables(pool: SqlitePool) {
    seed_director(&pool, 1, "Nolan").await;
    MovieRepo::create(&pool, &new_movie(1, "A", "x")).await.unwrap();
    MovieRepo::create(&pool, &new_movie(1, "B", "y")).await.unwrap();

    let stats = cinedex_db::catalog_stats(&pool).await.unwrap();
    assert_eq!(stats.movies, 2);
    assert_eq!(stats.directors, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn catalog_stats_fails_without_director_table(pool: SqlitePool) {
    sqlx::query("DROP TABLE movie").execute(&pool).await.unwrap();
    sqlx::query("DROP TABLE director").execute(&pool).await.unwrap();

    assert!(cinedex_db::catalog_stats(&pool).await.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_passes_on_open_pool(pool: SqlitePool) {
    cinedex_db::health_check(&pool).await.unwrap();
}
