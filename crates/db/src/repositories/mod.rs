mod director_repo;
mod movie_repo;

pub use director_repo::DirectorRepo;
pub use movie_repo::MovieRepo;
