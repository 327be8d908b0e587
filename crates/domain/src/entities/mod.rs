//! Domain entities.

mod movie;

pub use movie::{
    ActionizedMovie, MovieInfo, SavedMovie, Top10Category, Top10Collection, Top10Entry,
};
