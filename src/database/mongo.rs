use crate::database::LocationRepository;
use crate::domain::LocationRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

const DB_NAME: &str = "locationDB";
const COLLECTION_NAME: &str = "locations";

// the BSON shape of a record as it lives in the collection; `time` is stored
// as a native BSON datetime so the driver can sort on it
#[derive(Serialize, Deserialize)]
pub struct LocationDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub ip: String,
    pub lat: f64,
    pub long: f64,
    pub time: mongodb::bson::DateTime,
}

impl From<&LocationRecord> for LocationDocument {
    fn from(record: &LocationRecord) -> Self {
        Self {
            id: None,
            ip: record.ip.to_owned(),
            lat: record.lat,
            long: record.long,
            time: mongodb::bson::DateTime::from_millis(record.time.timestamp_millis()),
        }
    }
}

impl From<LocationDocument> for LocationRecord {
    fn from(document: LocationDocument) -> Self {
        Self {
            ip: document.ip,
            lat: document.lat,
            long: document.long,
            time: chrono::DateTime::from_timestamp_millis(document.time.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

pub struct MongoRepository {
    collection: Collection<LocationDocument>,
}

impl MongoRepository {
    // opening a client is lazy in the driver, so ping the database here;
    // callers can treat a returned repository as ready to serve traffic
    pub async fn connect(uri: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .context("Failed to parse MongoDB connection string")?;

        let db = client.database(DB_NAME);
        db.run_command(doc! { "ping": 1 })
            .await
            .context("Failed to reach MongoDB")?;

        Ok(Self {
            collection: db.collection(COLLECTION_NAME),
        })
    }
}

#[async_trait]
impl LocationRepository for MongoRepository {
    async fn insert_location(&self, record: &LocationRecord) -> Result<()> {
        let document = LocationDocument::from(record);

        self.collection
            .insert_one(document)
            .await
            .context("Failed to insert location document")?;

        Ok(())
    }

    async fn get_locations_newest_first(&self) -> Result<Vec<LocationRecord>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "time": -1 })
            .await
            .context("Failed to query locations")?;

        let documents: Vec<LocationDocument> = cursor
            .try_collect()
            .await
            .context("Failed to drain location cursor")?;

        Ok(documents.into_iter().map(LocationRecord::from).collect())
    }
}
