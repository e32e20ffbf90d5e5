mod handler;
mod model;

pub use handler::{
    add_favorite_people,
    add_favorite_planet,
    delete_favorite_people,
    delete_favorite_planet,
    list_favorites,
    list_user_favorites,
};
pub use model::{Favorite, FavoriteTarget};
