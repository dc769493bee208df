use std::future::Future;

use async_trait::async_trait;
use reqwest::Url;

use super::{auth, recipes, types::*, users, DeletedRecipe, RecipeApi};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::form::LoginForm;
use crate::http::{self, HttpClient};
use crate::model::auth::{LoginRequest, SessionUser};
use crate::model::{Listing, Recipe, RecipePayload, User};
use crate::pagination::PageParams;
use crate::session::Session;

pub struct Client {
    client: HttpClient,
    base_url: Url,
    token_ttl_mins: u32,
}

impl Client {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        let client = http::client_builder(config).build()?;
        Ok(Self {
            client,
            base_url,
            token_ttl_mins: config.token_ttl_mins,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url_for<T: Api>(&self, api: &T) -> Result<Url> {
        http::join_url(&self.base_url, &api.path())
    }

    pub async fn request<T: Api>(&self, api: &T, session: Option<&Session>) -> Result<T::Output> {
        let url = self.url_for(api)?;
        log::debug!("{:?} {}", T::OPERATION, url);

        let builder = match T::OPERATION {
            Operation::Get => self.client.get(url),
            Operation::Post => self.client.post(url),
            Operation::Put => self.client.put(url),
            Operation::Delete => self.client.delete(url),
        };
        let mut builder = http::authorize(builder.query(&api.query()), session)?;
        if let Some(body) = api.body() {
            builder = builder.json(body);
        }

        http::read(builder.send().await?).await
    }
}

#[async_trait]
impl RecipeApi for Client {
    async fn recipes(&self, page: PageParams) -> Result<Listing<Recipe>> {
        let api = recipes::ListRecipes {
            limit: page.page_size,
            skip: page.offset(),
        };
        Ok(self.request(&api, None).await?.into())
    }

    async fn all_recipes(&self) -> Result<Vec<Recipe>> {
        let api = recipes::ListRecipes { limit: 0, skip: 0 };
        let first: Listing<Recipe> = self.request(&api, None).await?.into();
        collect_pages(first, |page| self.recipes(page)).await
    }

    async fn recipe(&self, id: i64) -> Result<Recipe> {
        self.request(&recipes::GetRecipe { id }, None).await
    }

    async fn create_recipe(&self, session: &Session, payload: &RecipePayload) -> Result<Recipe> {
        let payload = RecipePayload {
            user_id: Some(session.user.id),
            ..payload.clone()
        };
        let recipe = self
            .request(&recipes::AddRecipe { payload: &payload }, Some(session))
            .await?;
        log::info!("created recipe {} ({})", recipe.id, recipe.name);
        Ok(recipe)
    }

    async fn update_recipe(
        &self,
        session: &Session,
        id: i64,
        payload: &RecipePayload,
    ) -> Result<Recipe> {
        let payload = RecipePayload {
            user_id: None,
            ..payload.clone()
        };
        let recipe = self
            .request(&recipes::UpdateRecipe { id, payload: &payload }, Some(session))
            .await?;
        log::info!("updated recipe {}", id);
        Ok(recipe)
    }

    async fn delete_recipe(&self, session: &Session, id: i64) -> Result<DeletedRecipe> {
        let deleted = self
            .request(&recipes::DeleteRecipe { id }, Some(session))
            .await?;
        log::info!("deleted recipe {}", id);
        Ok(deleted)
    }

    async fn users(&self, page: PageParams) -> Result<Listing<User>> {
        let api = users::ListUsers {
            limit: page.page_size,
            skip: page.offset(),
        };
        Ok(self.request(&api, None).await?.into())
    }

    async fn all_users(&self) -> Result<Vec<User>> {
        let api = users::ListUsers { limit: 0, skip: 0 };
        let first: Listing<User> = self.request(&api, None).await?.into();
        collect_pages(first, |page| self.users(page)).await
    }

    async fn user(&self, id: i64) -> Result<User> {
        self.request(&users::GetUser { id }, None).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let api = users::FilterUsers {
            key: "email",
            value: email,
        };
        Ok(self.request(&api, None).await?.users.into_iter().next())
    }

    async fn login(&self, form: &LoginForm) -> Result<Session> {
        form.validate()?;

        let username = if form.is_email() {
            self.find_user_by_email(&form.identifier)
                .await?
                .and_then(|u| u.username)
                .ok_or_else(|| ClientError::UnknownUser(form.identifier.clone()))?
        } else {
            form.identifier.clone()
        };

        let api = auth::Login {
            request: LoginRequest {
                username: &username,
                password: &form.password,
                expires_in_mins: self.token_ttl_mins,
            },
        };
        let rsp = self.request(&api, None).await?;

        // login payload has no role
        let user = self.user(rsp.id).await?;
        log::info!("logged in as {} ({})", username, user.role);

        Ok(Session::new(
            rsp.access_token,
            rsp.refresh_token,
            SessionUser::from(&user),
        ))
    }

    async fn me(&self, session: &Session) -> Result<User> {
        self.request(&auth::Me, Some(session)).await
    }
}

/// `limit=0` asks for everything, but a server may still cap the reply.
/// Walks the remaining pages when the first listing came back short.
async fn collect_pages<T, F, Fut>(first: Listing<T>, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(PageParams) -> Fut,
    Fut: Future<Output = Result<Listing<T>>>,
{
    if first.is_complete() {
        return Ok(first.items);
    }
    let total = first.total;
    let mut items = first.items;
    let mut page = PageParams::new(1, items.len() as u64);
    log::debug!("listing capped at {} of {}, fetching the rest", items.len(), total);

    while page.has_more(total) {
        page = PageParams::new(page.page + 1, page.page_size);
        let next = fetch(page).await?;
        if next.items.is_empty() {
            log::warn!("listing ended early at {} of {}", items.len(), total);
            break;
        }
        items.extend(next.items);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(all: &[u64], page: PageParams) -> Listing<u64> {
        Listing {
            items: page.slice(all).to_vec(),
            total: all.len() as u64,
            skip: page.offset(),
            limit: page.page_size,
        }
    }

    fn client() -> Client {
        Client::new(&ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::default().with_base_url("not a url");
        assert!(matches!(Client::new(&config), Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_endpoint_urls() {
        let c = client();
        assert_eq!(
            c.url_for(&recipes::GetRecipe { id: 5 }).unwrap().as_str(),
            "https://dummyjson.com/recipes/5"
        );
        assert_eq!(
            c.url_for(&recipes::AddRecipe {
                payload: &RecipePayload::default()
            })
            .unwrap()
            .as_str(),
            "https://dummyjson.com/recipes/add"
        );
        assert_eq!(
            c.url_for(&users::FilterUsers {
                key: "email",
                value: "a@b.c"
            })
            .unwrap()
            .as_str(),
            "https://dummyjson.com/users/filter"
        );
    }

    #[test]
    fn test_list_query_from_page() {
        let page = PageParams::new(3, 8);
        let api = recipes::ListRecipes {
            limit: page.page_size,
            skip: page.offset(),
        };
        assert_eq!(
            api.query(),
            vec![("limit", "8".to_string()), ("skip", "16".to_string())]
        );
        assert_eq!(<recipes::ListRecipes as Api>::OPERATION, Operation::Get);
        assert_eq!(<recipes::DeleteRecipe as Api>::OPERATION, Operation::Delete);
        assert_eq!(<recipes::UpdateRecipe as Api>::OPERATION, Operation::Put);
    }

    #[test]
    fn test_parse_deleted_recipe() {
        let json = serde_json::json!({
            "id": 1,
            "name": "Classic Margherita Pizza",
            "ingredients": [],
            "instructions": [],
            "prepTimeMinutes": 20,
            "cookTimeMinutes": 15,
            "servings": 4,
            "difficulty": "Easy",
            "cuisine": "Italian",
            "caloriesPerServing": 300,
            "userId": 166,
            "image": "",
            "isDeleted": true,
            "deletedOn": "2024-01-01T00:00:00.000Z"
        });
        let deleted: DeletedRecipe = serde_json::from_value(json).unwrap();
        assert!(deleted.is_deleted);
        assert_eq!(deleted.recipe.id, 1);
    }

    #[tokio::test]
    async fn test_collect_complete_listing() {
        let all: Vec<u64> = (1..=5).collect();
        let first = listing(&all, PageParams::new(1, 10));
        let mut seen = Vec::new();
        let items = collect_pages(first, |page| {
            seen.push(page.page);
            let rsp = listing(&all, page);
            async move { Ok::<_, ClientError>(rsp) }
        })
        .await
        .unwrap();
        assert_eq!(items, all);
        assert!(seen.is_empty());
    }

    #[tokio::test]
    async fn test_collect_capped_listing() {
        let all: Vec<u64> = (1..=23).collect();
        let first = listing(&all, PageParams::new(1, 10));
        let mut seen = Vec::new();
        let items = collect_pages(first, |page| {
            seen.push(page.page);
            let rsp = listing(&all, page);
            async move { Ok::<_, ClientError>(rsp) }
        })
        .await
        .unwrap();
        assert_eq!(items, all);
        assert_eq!(seen, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_collect_stops_on_short_remote() {
        let all: Vec<u64> = (1..=4).collect();
        let first = Listing {
            total: 10,
            ..listing(&all, PageParams::new(1, 4))
        };
        let items = collect_pages(first, |page| {
            let rsp = listing(&all, page);
            async move { Ok::<_, ClientError>(rsp) }
        })
        .await
        .unwrap();
        assert_eq!(items, all);
    }

    #[tokio::test]
    async fn test_login_rejects_blank_form_before_any_request() {
        let err = client().login(&LoginForm::default()).await.unwrap_err();
        assert!(matches!(err, ClientError::Form(_)));
    }
}
