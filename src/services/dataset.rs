use std::path::Path;

use thiserror::Error;

use crate::models::{Property, PropertyRecord, User, UserRecord};

/// Errors that can occur when loading the input datasets
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No valid rows in {0}")]
    Empty(String),
}

/// Load the users dataset from a CSV file
///
/// Rows that cannot be deserialized, or that lack a user ID, are skipped
/// with a warning rather than failing the run. Fails only when the file
/// is unreadable or yields no usable rows at all.
pub fn load_users<P: AsRef<Path>>(path: P) -> Result<Vec<User>, DatasetError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let mut users = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in reader.deserialize::<UserRecord>().enumerate() {
        match row {
            Ok(record) => match record.into_user() {
                Some(user) => users.push(user),
                None => {
                    skipped += 1;
                    tracing::warn!("Skipping user row {}: missing user ID", index + 1);
                }
            },
            Err(e) => {
                skipped += 1;
                tracing::warn!("Skipping malformed user row {}: {}", index + 1, e);
            }
        }
    }

    if users.is_empty() {
        return Err(DatasetError::Empty(path.display().to_string()));
    }

    tracing::info!(
        "Loaded {} users from {} ({} rows skipped)",
        users.len(),
        path.display(),
        skipped
    );

    Ok(users)
}

/// Load the properties dataset from a CSV file
///
/// Same skip-and-log policy as [`load_users`].
pub fn load_properties<P: AsRef<Path>>(path: P) -> Result<Vec<Property>, DatasetError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let mut properties = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in reader.deserialize::<PropertyRecord>().enumerate() {
        match row {
            Ok(record) => match record.into_property() {
                Some(property) => properties.push(property),
                None => {
                    skipped += 1;
                    tracing::warn!("Skipping property row {}: missing property ID", index + 1);
                }
            },
            Err(e) => {
                skipped += 1;
                tracing::warn!("Skipping malformed property row {}: {}", index + 1, e);
            }
        }
    }

    if properties.is_empty() {
        return Err(DatasetError::Empty(path.display().to_string()));
    }

    tracing::info!(
        "Loaded {} properties from {} ({} rows skipped)",
        properties.len(),
        path.display(),
        skipped
    );

    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_users_basic() {
        let file = write_temp(
            "User ID,Budget,Preferred Location,Preferred Type,Desired Size,Desired Bedrooms,Desired Bathrooms\n\
             1,350000,Downtown,Apartment,1200,2,1\n\
             2,500000,Suburbs,House,2400,4,2\n",
        );

        let users = load_users(file.path()).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].user_id, "1");
        assert_eq!(users[1].budget, 500_000.0);
    }

    #[test]
    fn test_rows_without_id_are_skipped() {
        let file = write_temp(
            "User ID,Budget,Preferred Location,Preferred Type,Desired Size,Desired Bedrooms,Desired Bathrooms\n\
             ,350000,Downtown,Apartment,1200,2,1\n\
             2,500000,Suburbs,House,2400,4,2\n",
        );

        let users = load_users(file.path()).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user_id, "2");
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let file = write_temp(
            "User ID,Budget,Preferred Location,Preferred Type,Desired Size,Desired Bedrooms,Desired Bathrooms\n",
        );

        let result = load_users(file.path());
        assert!(matches!(result, Err(DatasetError::Empty(_))));
    }

    #[test]
    fn test_load_properties_with_malformed_numbers() {
        let file = write_temp(
            "Property ID,Price,Location,Type,Size,Bedrooms,Bathrooms,Year Built,Condition\n\
             P1,450000,Downtown,Apartment,1300,2,1,2019,New\n\
             P2,oops,Suburbs,House,2100,3,2,2005,Good\n",
        );

        let properties = load_properties(file.path()).unwrap();
        // The malformed price defaults to 0 instead of dropping the row
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[1].price, 0.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_users("/nonexistent/users.csv");
        assert!(result.is_err());
    }
}
