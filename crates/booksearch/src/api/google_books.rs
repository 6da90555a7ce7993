use log::{debug, info, trace};

use crate::{
    query::RequestSpec,
    record::{normalize, BookRecord},
    response::VolumesResponse,
    Error,
};

use super::Client;

pub(crate) fn search_volumes<C: Client>(
    client: &C,
    request: &RequestSpec,
) -> Result<Vec<BookRecord>, Error> {
    info!("Searching for '{}' using Google Books API", request.query());
    let url = request.url()?;

    let response: VolumesResponse = client.get_json(&url)?;

    trace!("Request was successful");

    let records = normalize(response);
    debug!("Found {} items", records.len());

    Ok(records)
}
