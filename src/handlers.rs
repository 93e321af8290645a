use crate::binding::Binding;
use crate::completion::CompletionMap;
use crate::custom::CustomSelection;
use crate::errors::AppError;
use crate::keys::REMINDERS_ENABLED;
use crate::models::{
    AddCustomRequest, CustomAddResponse, CustomGroupView, ItemView, ListCategory, ListDetail,
    ListSummary, RemindersPayload, ToggleRequest,
};
use crate::reminders::reminders_enabled;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let lists: Vec<(ListCategory, CompletionMap)> = all_lists(&state)
        .into_iter()
        .map(|list| {
            let map = load_completion(&state, &list);
            (list, map)
        })
        .collect();
    Html(render_index(&lists))
}

pub async fn get_lists(State(state): State<AppState>) -> Json<Vec<ListSummary>> {
    let summaries = all_lists(&state)
        .iter()
        .map(|list| summarize(list, &load_completion(&state, list)))
        .collect();
    Json(summaries)
}

pub async fn get_list(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ListDetail>, AppError> {
    let list = resolve_list(&state, &key)?;
    let map = load_completion(&state, &list);
    Ok(Json(to_detail(&list, &map)))
}

pub async fn toggle(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ListDetail>, AppError> {
    let id = payload.id.trim().to_string();
    if id.is_empty() {
        return Err(AppError::bad_request("id must not be empty"));
    }
    let detail = apply(&state, &key, |map, ids| map.toggle(ids, &id)).await?;
    Ok(Json(detail))
}

pub async fn mark_all(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ListDetail>, AppError> {
    let detail = apply(&state, &key, |map, ids| map.mark_all(ids)).await?;
    Ok(Json(detail))
}

pub async fn reset(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ListDetail>, AppError> {
    let detail = apply(&state, &key, |map, ids| map.reset_all(ids)).await?;
    Ok(Json(detail))
}

pub async fn toggle_form(
    State(state): State<AppState>,
    Path((key, id)): Path<(String, String)>,
) -> Result<Redirect, AppError> {
    apply(&state, &key, |map, ids| map.toggle(ids, &id)).await?;
    Ok(Redirect::to("/"))
}

pub async fn mark_all_form(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Redirect, AppError> {
    apply(&state, &key, |map, ids| map.mark_all(ids)).await?;
    Ok(Redirect::to("/"))
}

pub async fn reset_form(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Redirect, AppError> {
    apply(&state, &key, |map, ids| map.reset_all(ids)).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_custom(State(state): State<AppState>) -> Json<Vec<CustomGroupView>> {
    let selection = CustomSelection::load(&state.storage);
    Json(group_views(&state, &selection))
}

pub async fn add_custom(
    State(state): State<AppState>,
    Json(payload): Json<AddCustomRequest>,
) -> Result<(StatusCode, Json<CustomAddResponse>), AppError> {
    let _guard = state.writes.lock().await;
    let mut selection = CustomSelection::load(&state.storage);
    let added = selection.add_category(&state.catalog, payload.category.trim())?;
    let response = CustomAddResponse {
        added,
        groups: group_views(&state, &selection),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn remove_custom(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CustomGroupView>>, AppError> {
    let _guard = state.writes.lock().await;
    let mut selection = CustomSelection::load(&state.storage);
    if !selection.remove_item(&id)? {
        return Err(AppError::not_found(format!("'{id}' is not in the daily list")));
    }
    Ok(Json(group_views(&state, &selection)))
}

pub async fn get_reminders(State(state): State<AppState>) -> Json<RemindersPayload> {
    Json(RemindersPayload {
        enabled: reminders_enabled(&state),
    })
}

pub async fn set_reminders(
    State(state): State<AppState>,
    Json(payload): Json<RemindersPayload>,
) -> Json<RemindersPayload> {
    let _guard = state.writes.lock().await;
    let mut binding = Binding::new(&state.storage, REMINDERS_ENABLED, false);
    binding.set(payload.enabled);
    Json(RemindersPayload {
        enabled: *binding.get(),
    })
}

async fn apply(
    state: &AppState,
    key: &str,
    op: impl FnOnce(CompletionMap, &[&str]) -> CompletionMap,
) -> Result<ListDetail, AppError> {
    let _guard = state.writes.lock().await;
    let list = resolve_list(state, key)?;
    let ids = list.item_ids();
    let mut binding = Binding::new(&state.storage, list.storage_key.as_str(), CompletionMap::new());
    binding.update(|map| op(map, &ids));
    Ok(to_detail(&list, binding.get()))
}

fn resolve_list(state: &AppState, key: &str) -> Result<ListCategory, AppError> {
    let selection = CustomSelection::load(&state.storage);
    state
        .catalog
        .resolve(key, selection.items())
        .ok_or_else(|| AppError::not_found("list not found"))
}

fn all_lists(state: &AppState) -> Vec<ListCategory> {
    let selection = CustomSelection::load(&state.storage);
    let mut lists = state.catalog.lists().to_vec();
    lists.extend(selection.grouped(&state.catalog));
    lists
}

fn load_completion(state: &AppState, list: &ListCategory) -> CompletionMap {
    Binding::new(&state.storage, list.storage_key.as_str(), CompletionMap::new()).into_inner()
}

fn group_views(state: &AppState, selection: &CustomSelection) -> Vec<CustomGroupView> {
    selection
        .grouped(&state.catalog)
        .into_iter()
        .map(|group| CustomGroupView {
            key: group.key,
            title: group.title,
            items: group.items,
        })
        .collect()
}

fn summarize(list: &ListCategory, map: &CompletionMap) -> ListSummary {
    let progress = map.progress(&list.item_ids());
    ListSummary {
        key: list.key.clone(),
        title: list.title.clone(),
        completed: progress.completed,
        total: progress.total,
        percent: progress.percent(),
        complete: progress.is_complete(),
    }
}

fn to_detail(list: &ListCategory, map: &CompletionMap) -> ListDetail {
    ListDetail {
        summary: summarize(list, map),
        items: list
            .items
            .iter()
            .map(|athkar| ItemView {
                completed: map.is_completed(&athkar.id),
                athkar: athkar.clone(),
            })
            .collect(),
    }
}
