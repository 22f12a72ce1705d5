//! Bulk player registration from CSV.

use crate::models::Tournament;

/// Register players from CSV data. The first field of each record is taken
/// as the player name; blank names and duplicates are skipped. Returns the
/// number of players actually added.
pub fn import_players(tournament: &mut Tournament, data: &str) -> Result<usize, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut added = 0;
    for record in reader.records() {
        let record = record?;
        let name = match record.get(0) {
            Some(n) => n,
            None => continue,
        };
        if tournament.add_player(name).is_ok() {
            added += 1;
        }
    }
    Ok(added)
}
