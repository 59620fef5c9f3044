//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

use crate::state::places::PAGE_SIZE;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader for one place card
#[component]
pub fn PlaceCardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl p-4 border border-gray-200 dark:border-gray-700 animate-pulse">
            <div class="h-5 bg-gray-200 dark:bg-gray-700 rounded w-2/3 mb-3" />
            <div class="h-4 bg-gray-200 dark:bg-gray-700 rounded w-1/2 mb-4" />
            <div class="flex gap-2">
                <div class="h-9 bg-gray-200 dark:bg-gray-700 rounded flex-1" />
                <div class="h-9 bg-gray-200 dark:bg-gray-700 rounded w-9" />
                <div class="h-9 bg-gray-200 dark:bg-gray-700 rounded w-9" />
            </div>
        </div>
    }
}

/// Skeleton grid shown while the first page loads
#[component]
pub fn SkeletonGrid(
    #[prop(default = PAGE_SIZE as usize)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
            {(0..count).map(|_| view! {
                <PlaceCardSkeleton />
            }).collect_view()}
        </div>
    }
}

/// Loading overlay for forms
#[component]
pub fn LoadingOverlay(
    #[prop(into)]
    loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="relative">
            {children()}

            {move || {
                loading.get().then(|| view! {
                    <div class="absolute inset-0 bg-gray-900/50 flex items-center justify-center rounded-lg">
                        <div class="loading-spinner w-8 h-8" />
                    </div>
                })
            }}
        </div>
    }
}
