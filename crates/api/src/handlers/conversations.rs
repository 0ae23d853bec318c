//! Handlers for the `/conversations` resource (inbox, thread, send).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validly_core::conversation as conversation_rules;
use validly_core::error::CoreError;
use validly_core::types::{DbId, Timestamp};
use validly_db::models::conversation::{Conversation, ConversationParticipant, CreateParticipant};
use validly_db::models::message::{CreateMessage, Message};
use validly_db::repositories::{ConversationRepo, MessageRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /conversations`.
#[derive(Debug, Deserialize)]
pub struct CreateConversationRequest {
    pub recipient_id: DbId,
}

/// Request body for `POST /conversations/{id}/messages`.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub body: String,
}

/// A participant as rendered by the client (avatar + name next to messages).
#[derive(Debug, Serialize)]
pub struct ParticipantInfo {
    pub user_id: DbId,
    pub display_name: String,
    pub photo_url: Option<String>,
}

impl From<&ConversationParticipant> for ParticipantInfo {
    fn from(p: &ConversationParticipant) -> Self {
        Self {
            user_id: p.user_id,
            display_name: p.display_name.clone(),
            photo_url: p.photo_url.clone(),
        }
    }
}

/// One inbox row: the conversation seen from the caller's side.
#[derive(Debug, Serialize)]
pub struct ConversationSummary {
    pub id: DbId,
    pub other_participant: ParticipantInfo,
    pub last_message: Option<Message>,
    pub updated_at: Timestamp,
}

/// The full thread view: participants plus the ordered message list.
#[derive(Debug, Serialize)]
pub struct ConversationDetail {
    pub id: DbId,
    pub participants: Vec<ParticipantInfo>,
    pub messages: Vec<Message>,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// POST /conversations
// ---------------------------------------------------------------------------

/// Get or create the conversation between the caller and a recipient.
///
/// Conversations are unique per user pair (`uq_conversations_pair_key`), so
/// messaging the same applicant twice lands in the same thread. Returns 200
/// for an existing conversation, 201 for a freshly created one.
pub async fn create_conversation(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateConversationRequest>,
) -> AppResult<impl IntoResponse> {
    if input.recipient_id == auth.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "You cannot start a conversation with yourself".into(),
        )));
    }

    let recipient = UserRepo::find_by_id(&state.pool, input.recipient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.recipient_id,
        }))?;

    let me = super::require_user(&state.pool, &auth).await?;

    let pair_key = conversation_rules::pair_key(me.id, recipient.id);

    if let Some(existing) = ConversationRepo::find_by_pair_key(&state.pool, &pair_key).await? {
        let detail = load_detail(&state, existing).await?;
        return Ok((StatusCode::OK, Json(DataResponse { data: detail })));
    }

    let participants = [
        CreateParticipant {
            user_id: me.id,
            display_name: me.display_name.clone(),
            photo_url: me.photo_url.clone(),
        },
        CreateParticipant {
            user_id: recipient.id,
            display_name: recipient.display_name.clone(),
            photo_url: recipient.photo_url.clone(),
        },
    ];
    let conversation = ConversationRepo::create(&state.pool, &pair_key, &participants).await?;

    tracing::info!(
        conversation_id = conversation.id,
        user_id = me.id,
        recipient_id = recipient.id,
        "Conversation started",
    );

    let detail = load_detail(&state, conversation).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

// ---------------------------------------------------------------------------
// GET /conversations
// ---------------------------------------------------------------------------

/// List the caller's conversations, most recently active first, each with
/// the other participant and the last message (the inbox view).
pub async fn list_conversations(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let conversations = ConversationRepo::list_for_user(&state.pool, auth.user_id).await?;

    let mut summaries = Vec::with_capacity(conversations.len());
    for conversation in conversations {
        let participants = ConversationRepo::participants(&state.pool, conversation.id).await?;

        let other = participants
            .iter()
            .find(|p| p.user_id != auth.user_id)
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Conversation {} has no counterpart participant",
                    conversation.id
                ))
            })?;

        let last_message = match conversation.last_message_id {
            Some(message_id) => MessageRepo::find_by_id(&state.pool, message_id).await?,
            None => None,
        };

        summaries.push(ConversationSummary {
            id: conversation.id,
            other_participant: ParticipantInfo::from(other),
            last_message,
            updated_at: conversation.updated_at,
        });
    }

    Ok(Json(DataResponse { data: summaries }))
}

// ---------------------------------------------------------------------------
// GET /conversations/:id
// ---------------------------------------------------------------------------

/// Get a conversation with its full message list, ascending by creation
/// time. Participant-only.
pub async fn get_conversation(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let conversation = find_for_participant(&state, id, &auth).await?;
    let detail = load_detail(&state, conversation).await?;
    Ok(Json(DataResponse { data: detail }))
}

// ---------------------------------------------------------------------------
// POST /conversations/:id/messages
// ---------------------------------------------------------------------------

/// Send a message into a conversation. Participant-only. The created row is
/// returned so the client appends it to the thread on acknowledgment.
pub async fn send_message(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SendMessageRequest>,
) -> AppResult<impl IntoResponse> {
    let body = conversation_rules::validate_message_body(&input.body)?;

    let conversation = find_for_participant(&state, id, &auth).await?;

    let create = CreateMessage {
        conversation_id: conversation.id,
        sender_id: auth.user_id,
        body: body.to_string(),
    };
    let message = MessageRepo::create(&state.pool, &create).await?;

    tracing::info!(
        message_id = message.id,
        conversation_id = conversation.id,
        sender_id = auth.user_id,
        "Message sent",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a conversation and reject callers who are not a participant.
async fn find_for_participant(
    state: &AppState,
    id: DbId,
    auth: &AuthUser,
) -> Result<Conversation, AppError> {
    let conversation = ConversationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conversation",
            id,
        }))?;

    let participants = ConversationRepo::participants(&state.pool, id).await?;
    let participant_ids: Vec<DbId> = participants.iter().map(|p| p.user_id).collect();

    if conversation_rules::other_participant(&participant_ids, auth.user_id).is_none() {
        return Err(AppError::Core(CoreError::Forbidden(
            "You are not a participant in this conversation".into(),
        )));
    }

    Ok(conversation)
}

/// Assemble the thread view for a conversation.
async fn load_detail(
    state: &AppState,
    conversation: Conversation,
) -> Result<ConversationDetail, AppError> {
    let participants = ConversationRepo::participants(&state.pool, conversation.id).await?;
    let messages = MessageRepo::list_for_conversation(&state.pool, conversation.id).await?;

    Ok(ConversationDetail {
        id: conversation.id,
        participants: participants.iter().map(ParticipantInfo::from).collect(),
        messages,
        updated_at: conversation.updated_at,
    })
}
