//! Side effects requested by a [`CrudScreen`](super::CrudScreen) and their results.

use std::fmt;

use crate::console::api::{ApiClient, ApiError};
use crate::console::screen::{Entity, EntityForm};

type CreateOf<E> = <<E as Entity>::Form as EntityForm>::Create;
type UpdateOf<E> = <<E as Entity>::Form as EntityForm>::Update;

/// A request the screen wants issued
pub enum Command<E: Entity> {
    FetchList { generation: u64 },
    Create(CreateOf<E>),
    Update { id: i64, body: UpdateOf<E> },
    Delete { id: i64 },
}

/// What came back from a [`Command`]
pub enum Outcome<E: Entity> {
    Listed {
        generation: u64,
        result: Result<Vec<E::Record>, ApiError>,
    },
    Saved(Result<E::Record, ApiError>),
    Deleted {
        id: i64,
        result: Result<(), ApiError>,
    },
}

impl<E: Entity> fmt::Debug for Command<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::FetchList { generation } => f
                .debug_struct("FetchList")
                .field("generation", generation)
                .finish(),
            Command::Create(body) => f.debug_tuple("Create").field(body).finish(),
            Command::Update { id, body } => f
                .debug_struct("Update")
                .field("id", id)
                .field("body", body)
                .finish(),
            Command::Delete { id } => f.debug_struct("Delete").field("id", id).finish(),
        }
    }
}

impl<E: Entity> fmt::Debug for Outcome<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Listed { generation, result } => f
                .debug_struct("Listed")
                .field("generation", generation)
                .field("result", result)
                .finish(),
            Outcome::Saved(result) => f.debug_tuple("Saved").field(result).finish(),
            Outcome::Deleted { id, result } => f
                .debug_struct("Deleted")
                .field("id", id)
                .field("result", result)
                .finish(),
        }
    }
}

impl<E: Entity> Command<E> {
    pub fn describe(&self) -> String {
        match self {
            Command::FetchList { .. } => format!("GET {}", E::COLLECTION),
            Command::Create(_) => format!("POST {}", E::COLLECTION),
            Command::Update { id, .. } => format!("PUT {}", item_path::<E>(*id)),
            Command::Delete { id } => format!("DELETE {}", item_path::<E>(*id)),
        }
    }
}

/// `{collection}/{id}`
pub fn item_path<E: Entity>(id: i64) -> String {
    format!("{}/{}", E::COLLECTION, id)
}

/// Issue one command against the backend
pub async fn execute<E: Entity>(client: &ApiClient, command: Command<E>) -> Outcome<E> {
    match command {
        Command::FetchList { generation } => Outcome::Listed {
            generation,
            result: client.get::<Vec<E::Record>>(E::COLLECTION).await,
        },
        Command::Create(body) => Outcome::Saved(client.post(E::COLLECTION, &body).await),
        Command::Update { id, body } => {
            Outcome::Saved(client.put(&item_path::<E>(id), &body).await)
        }
        Command::Delete { id } => Outcome::Deleted {
            id,
            result: client.delete(&item_path::<E>(id)).await,
        },
    }
}
