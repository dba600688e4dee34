use application::service::{
    CreateTextbookService, DeleteTextbookService, ExistsTextbookService, GetTextbookService,
    UpdateTextbookService,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use kernel::interface::database::{DatabaseConnection, WorldState};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::identity::CallerIdentity;
use crate::request::{
    CreateTextbookRequest, DeleteTextbookRequest, GetTextbookRequest, TextbookTransformer,
    UpdateTextbookRequest,
};
use crate::response::TextbookPresenter;

pub trait TextbookRouter {
    fn route_textbook(self) -> Self;
}

impl<C> TextbookRouter for Router<AppModule<C>>
where
    C: DatabaseConnection,
    C::Transaction: WorldState,
{
    fn route_textbook(self) -> Self {
        self.route(
            "/textbooks",
            post(
                |State(module): State<AppModule<C>>,
                 caller: CallerIdentity,
                 Json(req): Json<CreateTextbookRequest>| async move {
                    Controller::new(TextbookTransformer, TextbookPresenter)
                        .intake(req)
                        .handle(|dto| async move {
                            module
                                .contract(move |contract| contract.create_textbook(&caller, dto))
                                .await
                        })
                        .await
                        .map(|res| (StatusCode::CREATED, res))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/textbooks/:id",
            get(
                |State(module): State<AppModule<C>>, Path(id): Path<String>| async move {
                    Controller::new(TextbookTransformer, TextbookPresenter)
                        .intake(GetTextbookRequest::new(id))
                        .handle(|dto| async move {
                            module
                                .contract(move |contract| contract.get_textbook(&dto))
                                .await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule<C>>,
                 caller: CallerIdentity,
                 Path(id): Path<String>,
                 Json(req): Json<UpdateTextbookRequest>| async move {
                    Controller::new(TextbookTransformer, TextbookPresenter)
                        .intake((id, req))
                        .handle(|dto| async move {
                            module
                                .contract(move |contract| contract.update_textbook(&caller, dto))
                                .await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule<C>>,
                 caller: CallerIdentity,
                 Path(id): Path<String>| async move {
                    Controller::new(TextbookTransformer, TextbookPresenter)
                        .intake(DeleteTextbookRequest::new(id))
                        .handle(|dto| async move {
                            module
                                .contract(move |contract| contract.delete_textbook(&caller, dto))
                                .await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/textbooks/:id/exists",
            get(
                |State(module): State<AppModule<C>>, Path(id): Path<String>| async move {
                    Controller::new(TextbookTransformer, TextbookPresenter)
                        .intake(GetTextbookRequest::new(id))
                        .handle(|dto| async move {
                            module
                                .contract(move |contract| contract.textbook_exists(&dto))
                                .await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
