use application::transfer::{
    CreateTextbookDto, DeleteTextbookDto, GetTextbookDto, UpdateTextbookDto,
};
use serde::Deserialize;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct CreateTextbookRequest {
    id: String,
    title: String,
    author: String,
    year: String,
    price: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTextbookRequest {
    title: String,
    author: String,
    year: String,
    price: String,
}

#[derive(Debug)]
pub struct GetTextbookRequest {
    id: String,
}

impl GetTextbookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteTextbookRequest {
    id: String,
}

impl DeleteTextbookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct TextbookTransformer;

impl Intake<CreateTextbookRequest> for TextbookTransformer {
    type To = CreateTextbookDto;
    fn emit(&self, input: CreateTextbookRequest) -> Self::To {
        CreateTextbookDto {
            id: input.id,
            title: input.title,
            author: input.author,
            year: input.year,
            price: input.price,
        }
    }
}

impl Intake<(String, UpdateTextbookRequest)> for TextbookTransformer {
    type To = UpdateTextbookDto;
    fn emit(&self, input: (String, UpdateTextbookRequest)) -> Self::To {
        let (id, input) = input;
        UpdateTextbookDto {
            id,
            title: input.title,
            author: input.author,
            year: input.year,
            price: input.price,
        }
    }
}

impl Intake<GetTextbookRequest> for TextbookTransformer {
    type To = GetTextbookDto;
    fn emit(&self, input: GetTextbookRequest) -> Self::To {
        GetTextbookDto { id: input.id }
    }
}

impl Intake<DeleteTextbookRequest> for TextbookTransformer {
    type To = DeleteTextbookDto;
    fn emit(&self, input: DeleteTextbookRequest) -> Self::To {
        DeleteTextbookDto { id: input.id }
    }
}
