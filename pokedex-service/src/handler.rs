use itertools::Itertools;
use log::{
    debug,
    error,
    info,
};
use pokedex::{
    SpeciesData,
    dex::Dex,
    error::InvalidSortKeyError,
    format::{
        MoveEntry,
        MoveList,
        SpeciesList,
        TypeEntry,
        TypeList,
    },
    sort::SortKey,
};

use crate::{
    help::HELP_TEXT,
    http::{
        Method,
        Query,
        Request,
        Response,
        StatusCode,
    },
};

const LIST_PATH: &str = "/list";
const NOT_FOUND: &str = "404 Not Found";

/// Dispatches a request against the dex.
///
/// Dispatching never fails. Unknown resources and bad queries produce error responses.
pub fn handle(dex: &Dex<'_>, request: &Request) -> Response {
    match &request.method {
        Method::Get | Method::Head => (),
        Method::Other(method) => {
            info!("405 Error: Client used unsupported method {method}");
            return Response::error(StatusCode::MethodNotAllowed, "405 Method Not Allowed");
        }
    }
    if request.path == LIST_PATH {
        list(dex, request.query.as_ref())
    } else {
        resource(dex, &request.path)
    }
}

fn all_species<'d>(dex: &Dex<'d>) -> Vec<&'d SpeciesData> {
    dex.species.all().iter().collect()
}

fn list(dex: &Dex<'_>, query: Option<&Query>) -> Response {
    let query = match query {
        Some(query) => query,
        None => {
            info!("Served all pokemons, moves and types");
            return Response::ok(format!(
                "-----Pokemons-----\n{}-----Types-----\n{}-----Moves-----\n{}",
                SpeciesList(&all_species(dex)),
                TypeList::new(dex, dex.types.all()),
                MoveList::new(dex, dex.moves.all()),
            ));
        }
    };

    if let Some(type_name) = query.get("type") {
        if type_name.is_empty() {
            info!("400 Error: Client left Pokemon type value empty");
            return Response::error(
                StatusCode::BadRequest,
                "You need to provide the pokemon type value!",
            );
        }
        info!("Client requested to list pokemons by type {type_name}");
        return list_by_type(dex, type_name, query);
    }

    if query.contains("pokemons") {
        info!("Served all pokemons");
        return Response::ok(SpeciesList(&all_species(dex)).to_string());
    }
    if query.contains("types") {
        info!("Served all pokemon types");
        return Response::ok(TypeList::new(dex, dex.types.all()).to_string());
    }
    if query.contains("moves") {
        info!("Served all pokemon moves");
        return Response::ok(MoveList::new(dex, dex.moves.all()).to_string());
    }

    info!("404 Error: Client's request is not found");
    Response::error(StatusCode::NotFound, NOT_FOUND)
}

fn list_by_type(dex: &Dex<'_>, type_name: &str, query: &Query) -> Response {
    let species = dex.filter_species("type", type_name);
    if species.is_empty() {
        info!("Client provided invalid pokemon type {type_name}");
        return Response::error(
            StatusCode::NotFound,
            format!("Could not find any pokemons for the type {type_name}"),
        );
    }

    let species = match query.get("sortby") {
        None => species,
        Some("") => {
            info!("Client requested sorting types");
            return Response::ok(format!(
                "Available sorting types: {}\n",
                SortKey::ALL_LABELS.iter().join(", ")
            ));
        }
        Some(key) => match dex.sort_species(species, key) {
            Ok(sorted) if query.contains("reversed") => {
                info!("Reversed sorted pokemons");
                dex.reverse(sorted)
            }
            Ok(sorted) => sorted,
            Err(err) => return sort_error(err),
        },
    };
    Response::ok(SpeciesList(&species).to_string())
}

fn sort_error(err: anyhow::Error) -> Response {
    match err.downcast_ref::<InvalidSortKeyError>() {
        Some(err) => {
            info!("Client provided wrong sorting type {}", err.key());
            Response::error(
                StatusCode::BadRequest,
                format!(
                    "Wrong sorting type {}! Use one of the following: {}",
                    err.key(),
                    SortKey::ALL_LABELS.iter().join(", ")
                ),
            )
        }
        None => {
            error!("Failed to sort pokemons: {err:#}");
            Response::error(StatusCode::InternalServerError, "500 Internal Server Error")
        }
    }
}

fn resource(dex: &Dex<'_>, path: &str) -> Response {
    let name = path.strip_prefix('/').unwrap_or(path);
    if name.is_empty() || name == "help" {
        info!("Served help text");
        return Response::ok(HELP_TEXT);
    }

    let name = name.to_lowercase();
    info!("Client requested resource {name}");

    let species = dex.resolve_species(&name);
    if !species.is_empty() {
        info!("Served pokemon with the name {name}");
        return Response::ok(SpeciesList(&species).to_string());
    }
    match dex.resolve_type(&name) {
        Ok(data) => {
            info!("Served type with the name {name}");
            return Response::ok(format!("{}\n", TypeEntry::new(dex, data)));
        }
        Err(err) => debug!("{err}"),
    }
    match dex.resolve_move(&name) {
        Ok(data) => {
            info!("Served move with the name {name}");
            return Response::ok(format!("{}\n", MoveEntry::new(dex, data)));
        }
        Err(err) => debug!("{err}"),
    }

    info!("404 Error: Client's request is not found");
    Response::error(StatusCode::NotFound, NOT_FOUND)
}
