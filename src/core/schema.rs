use crate::core::dispatcher::QueryDispatcher;
use crate::domain::model::Meter;
use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};

pub type MeterSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// The root GraphQL query type.
pub struct QueryRoot {
    dispatcher: QueryDispatcher,
}

#[Object]
impl QueryRoot {
    /// Returns the meter with the given id, or `null` if there is none.
    async fn get_meter_by_id(&self, id: String) -> async_graphql::Result<Option<Meter>> {
        Ok(self.dispatcher.get_by_id(&id).await?)
    }

    /// Returns every meter.
    async fn get_all_meters(&self) -> async_graphql::Result<Vec<Meter>> {
        Ok(self.dispatcher.get_all().await?)
    }
}

pub fn build_schema(dispatcher: QueryDispatcher) -> MeterSchema {
    Schema::build(QueryRoot { dispatcher }, EmptyMutation, EmptySubscription).finish()
}
